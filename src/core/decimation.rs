use ordered_float::OrderedFloat;

use crate::core::types::ScatterPoint;

/// Stride used to keep roughly one point per horizontal pixel.
///
/// Returns `1` (keep everything) when the series already fits the surface or
/// no width is known.
#[must_use]
pub fn decimation_stride(point_count: usize, surface_width_px: u32) -> usize {
    let width = surface_width_px as usize;
    if width == 0 || point_count <= width {
        return 1;
    }
    ((point_count as f64 / width as f64).round() as usize).max(1)
}

/// Sorts scatter samples by `x` and keeps every `k`-th one.
///
/// The sort is stable, so samples sharing an `x` keep submission order and
/// connected segments run left to right. The result is a display-only
/// reduction; scale computed from it only reflects the kept samples.
#[must_use]
pub fn decimate_points(points: &[ScatterPoint], surface_width_px: u32) -> Vec<ScatterPoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by_key(|point| OrderedFloat(point.x));

    let stride = decimation_stride(sorted.len(), surface_width_px);
    if stride == 1 {
        return sorted;
    }

    sorted.into_iter().step_by(stride).collect()
}
