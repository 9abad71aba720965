use serde::{Deserialize, Serialize};

use crate::core::SeriesId;
use crate::render::RenderFrame;

use super::ChartEngineConfig;

/// Per-series state captured in an [`EngineSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub id: SeriesId,
    pub point_count: usize,
    pub hidden: bool,
    pub connected: bool,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub config: ChartEngineConfig,
    pub revision: u64,
    pub series: Vec<SeriesSnapshot>,
    pub frame: RenderFrame,
}
