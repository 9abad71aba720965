pub mod decimation;
pub mod geometry;
pub mod range_adjuster;
pub mod scale;
pub mod ticks;
pub mod types;

pub use decimation::{decimate_points, decimation_stride};
pub use geometry::{
    BarExtent, LineSegment, PixelPoint, bar_extent, normalize, normalize_vertical,
    project_line_segments, project_to_pixels, segment_between,
};
pub use range_adjuster::{RoundDirection, adjust_axis_extreme};
pub use scale::{AXIS_PADDING_RATIO, ValueExtent, bounds_from_extent, compute_axis_bounds};
pub use ticks::{
    AxisLabelLocale, AxisTicks, MAX_TICK_STEPS, axis_ticks, format_tick_label, tick_step_count,
};
pub use types::{
    AxisBounds, AxisClamp, CategoryKey, ChartKind, ScatterPoint, SeriesId, SurfaceSize,
};
