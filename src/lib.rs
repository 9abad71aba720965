//! chartsy-rs: axis-scaling and multi-series coordination engine.
//!
//! Series providers push points into a shared registry; the engine derives
//! rounded axis bounds, tick sequences and normalized geometry from the
//! aggregate. Turning that geometry into pixels or markup is left to a
//! `render::Renderer` implementation supplied by the host.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
