use tracing::debug;

use crate::core::{CategoryKey, ScatterPoint, SeriesId};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Appends one bar value to `series` under the category `key`.
    ///
    /// Repeated calls for the same series append. `hidden` is applied to the
    /// series flag at the same time.
    pub fn register_bar_value(
        &mut self,
        series: SeriesId,
        key: impl Into<CategoryKey>,
        value: f64,
        color: impl Into<String>,
        hidden: bool,
    ) -> ChartResult<()> {
        self.registry
            .register_bar(series, key.into(), value, color, hidden)
    }

    /// Appends one scatter sample to `series`.
    ///
    /// `connected = None` keeps the current connection flag.
    pub fn register_scatter_point(
        &mut self,
        series: SeriesId,
        point: ScatterPoint,
        color: impl Into<String>,
        hidden: bool,
        connected: Option<bool>,
    ) -> ChartResult<()> {
        self.registry
            .register_scatter(series, point, color, hidden, connected)
    }

    /// Hides or reveals a series without touching its points.
    ///
    /// Returns `true` when derived state will be recomputed. Unknown series
    /// and unchanged values are no-ops unless `force` is set.
    pub fn set_hidden(&mut self, series: SeriesId, hidden: bool, force: bool) -> bool {
        let changed = self.registry.set_hidden(series, hidden, force);
        if changed {
            debug!(%series, hidden, force, "series visibility changed");
        }
        changed
    }

    /// Switches a scatter series between markers and connected segments.
    pub fn set_connected(&mut self, series: SeriesId, connected: bool, force: bool) -> bool {
        let changed = self.registry.set_connected(series, connected, force);
        if changed {
            debug!(%series, connected, force, "series connection changed");
        }
        changed
    }

    #[must_use]
    pub fn is_hidden(&self, series: SeriesId) -> bool {
        self.registry.is_hidden(series)
    }

    #[must_use]
    pub fn is_connected(&self, series: SeriesId) -> bool {
        self.registry.is_connected(series)
    }

    /// Series ids in first-registration order.
    #[must_use]
    pub fn series_ids(&self) -> Vec<SeriesId> {
        self.registry.series_ids().collect()
    }

    #[must_use]
    pub fn series(&self, series: SeriesId) -> Option<&super::SeriesRecord> {
        self.registry.series(series)
    }
}
