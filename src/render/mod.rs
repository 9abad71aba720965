mod frame;
mod null_renderer;

pub use frame::{
    AxisFrame, AxisTick, BarColumn, BarGeometry, MarkerGeometry, RenderFrame, ScatterSeriesFrame,
    SegmentGeometry,
};
pub use null_renderer::NullRenderer;

use crate::error::ChartResult;

/// Contract implemented by whatever turns derived chart state into pixels.
///
/// Renderers receive a fully derived `RenderFrame`, so drawing code never
/// touches the series registry or the scaling rules.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
