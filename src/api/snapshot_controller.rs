use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, EngineSnapshot, SeriesSnapshot};

impl<R: Renderer> ChartEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    pub fn snapshot(&self) -> ChartResult<EngineSnapshot> {
        let series = self
            .registry
            .records()
            .map(|record| SeriesSnapshot {
                id: record.id,
                point_count: record.points.len(),
                hidden: self.registry.is_hidden(record.id),
                connected: self.registry.is_connected(record.id),
            })
            .collect();

        Ok(EngineSnapshot {
            config: self.config,
            revision: self.registry.revision(),
            series,
            frame: (*self.frame()?).clone(),
        })
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
