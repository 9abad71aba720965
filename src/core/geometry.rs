use serde::{Deserialize, Serialize};

use crate::core::types::{AxisBounds, ScatterPoint, SurfaceSize};
use crate::error::{ChartError, ChartResult};

/// Position of `value` along an axis as a fraction of the visible range.
///
/// Values outside the bounds map outside `[0, 1]`.
#[must_use]
pub fn normalize(value: f64, bounds: AxisBounds) -> f64 {
    (value - bounds.min()) / bounds.span()
}

/// Same as [`normalize`] but measured from the top edge, since render space
/// grows downward while data space grows upward.
#[must_use]
pub fn normalize_vertical(value: f64, bounds: AxisBounds) -> f64 {
    1.0 - normalize(value, bounds)
}

/// Point in surface pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// Vertical slot of a bar, as fractions of the plot height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarExtent {
    /// Distance from the top edge to the top of the bar.
    pub top: f64,
    /// Bar height measured from the axis minimum.
    pub height: f64,
}

impl BarExtent {
    /// Zero-height bar resting on the axis floor.
    pub const COLLAPSED: Self = Self {
        top: 1.0,
        height: 0.0,
    };
}

#[must_use]
pub fn bar_extent(value: f64, bounds: AxisBounds) -> BarExtent {
    let height = normalize(value, bounds);
    BarExtent {
        top: 1.0 - height,
        height,
    }
}

/// Maps a scatter sample into pixels on a surface of the given size.
pub fn project_to_pixels(
    point: ScatterPoint,
    x_bounds: AxisBounds,
    y_bounds: AxisBounds,
    surface: SurfaceSize,
) -> ChartResult<PixelPoint> {
    let surface = surface.validate()?;
    if !point.is_finite() {
        return Err(ChartError::InvalidData(
            "scatter point must be finite".to_owned(),
        ));
    }

    Ok(PixelPoint {
        x: normalize(point.x, x_bounds) * f64::from(surface.width),
        y: normalize_vertical(point.y, y_bounds) * f64::from(surface.height),
    })
}

/// Connector between two consecutive samples of a connected series.
///
/// A renderer anchors the segment at `(x, y)`, rotates it by `angle_deg` and
/// stretches it to `length`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub angle_deg: f64,
}

#[must_use]
pub fn segment_between(start: PixelPoint, end: PixelPoint) -> LineSegment {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    LineSegment {
        x: start.x,
        y: start.y,
        length: dx.hypot(dy),
        angle_deg: dy.atan2(dx).to_degrees(),
    }
}

/// Projects consecutive samples into connecting segments.
///
/// Fewer than two samples produce no segments.
pub fn project_line_segments(
    points: &[ScatterPoint],
    x_bounds: AxisBounds,
    y_bounds: AxisBounds,
    surface: SurfaceSize,
) -> ChartResult<Vec<LineSegment>> {
    if points.len() < 2 {
        return Ok(Vec::new());
    }

    let mut mapped = Vec::with_capacity(points.len());
    for point in points {
        mapped.push(project_to_pixels(*point, x_bounds, y_bounds, surface)?);
    }

    Ok(mapped
        .windows(2)
        .map(|pair| segment_between(pair[0], pair[1]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{PixelPoint, bar_extent, segment_between};
    use crate::core::types::AxisBounds;

    #[test]
    fn horizontal_segment_has_zero_angle() {
        let segment = segment_between(PixelPoint { x: 10.0, y: 5.0 }, PixelPoint { x: 40.0, y: 5.0 });
        assert_eq!(segment.length, 30.0);
        assert_eq!(segment.angle_deg, 0.0);
    }

    #[test]
    fn downward_segment_rotates_clockwise() {
        let segment = segment_between(PixelPoint { x: 0.0, y: 0.0 }, PixelPoint { x: 0.0, y: 20.0 });
        assert!((segment.angle_deg - 90.0).abs() <= 1e-9);
    }

    #[test]
    fn bar_extent_measures_from_axis_floor() {
        let bounds = AxisBounds::new(-10.0, 30.0).expect("bounds");
        let extent = bar_extent(20.0, bounds);
        assert!((extent.height - 0.75).abs() <= 1e-12);
        assert!((extent.top - 0.25).abs() <= 1e-12);
    }
}
