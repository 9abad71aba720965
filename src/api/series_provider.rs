use tracing::{debug, warn};

use crate::core::{
    CategoryKey, ChartKind, ScatterPoint, SeriesId, SurfaceSize, decimate_points,
};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;

/// Fallback color for providers that do not pick one.
pub const DEFAULT_SERIES_COLOR: &str = "#888";

/// Callbacks a series provider is given instead of direct registry access.
pub trait RegistrationPort {
    fn chart_kind(&self) -> ChartKind;

    fn surface_size(&self) -> Option<SurfaceSize>;

    fn register_bar_value(
        &mut self,
        series: SeriesId,
        key: CategoryKey,
        value: f64,
        color: &str,
        hidden: bool,
    ) -> ChartResult<()>;

    fn register_scatter_point(
        &mut self,
        series: SeriesId,
        point: ScatterPoint,
        color: &str,
        hidden: bool,
        connected: Option<bool>,
    ) -> ChartResult<()>;

    fn set_hidden(&mut self, series: SeriesId, hidden: bool, force: bool) -> bool;

    fn set_connected(&mut self, series: SeriesId, connected: bool, force: bool) -> bool;
}

impl<R: Renderer> RegistrationPort for ChartEngine<R> {
    fn chart_kind(&self) -> ChartKind {
        self.kind()
    }

    fn surface_size(&self) -> Option<SurfaceSize> {
        ChartEngine::surface_size(self)
    }

    fn register_bar_value(
        &mut self,
        series: SeriesId,
        key: CategoryKey,
        value: f64,
        color: &str,
        hidden: bool,
    ) -> ChartResult<()> {
        ChartEngine::register_bar_value(self, series, key, value, color, hidden)
    }

    fn register_scatter_point(
        &mut self,
        series: SeriesId,
        point: ScatterPoint,
        color: &str,
        hidden: bool,
        connected: Option<bool>,
    ) -> ChartResult<()> {
        ChartEngine::register_scatter_point(self, series, point, color, hidden, connected)
    }

    fn set_hidden(&mut self, series: SeriesId, hidden: bool, force: bool) -> bool {
        ChartEngine::set_hidden(self, series, hidden, force)
    }

    fn set_connected(&mut self, series: SeriesId, connected: bool, force: bool) -> bool {
        ChartEngine::set_connected(self, series, connected, force)
    }
}

/// Outcome of one provider render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountStatus {
    /// First pass; every point was registered.
    Registered { points: usize },
    /// First pass with nothing to register. The chart stays renderable.
    MissingData,
    /// Later pass; only flags were sent. `changed` tells whether the engine
    /// will recompute.
    FlagsBroadcast { changed: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ProviderPhase {
    #[default]
    Unmounted,
    Mounted,
    Broadcasting,
}

impl ProviderPhase {
    /// The first broadcast after mount is forced so the flag reaches the
    /// engine even if it matches the registry default.
    fn next_broadcast_is_forced(&mut self) -> bool {
        let forced = *self == Self::Mounted;
        *self = Self::Broadcasting;
        forced
    }
}

/// Provider of one bar series: registers its values once, then only
/// broadcasts its hidden flag on later renders.
///
/// Non-finite values are skipped at mount; the rest still register.
#[derive(Debug, Clone)]
pub struct BarDataSeries {
    id: SeriesId,
    data: Vec<(CategoryKey, f64)>,
    color: String,
    hidden: bool,
    phase: ProviderPhase,
}

impl BarDataSeries {
    #[must_use]
    pub fn new<K: Into<CategoryKey>>(data: impl IntoIterator<Item = (K, f64)>) -> Self {
        Self {
            id: SeriesId::next(),
            data: data.into_iter().map(|(key, value)| (key.into(), value)).collect(),
            color: DEFAULT_SERIES_COLOR.to_owned(),
            hidden: false,
            phase: ProviderPhase::Unmounted,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    #[must_use]
    pub fn id(&self) -> SeriesId {
        self.id
    }

    /// Changes the hidden prop; takes effect on the next [`Self::render`].
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn render<P: RegistrationPort + ?Sized>(&mut self, port: &mut P) -> ChartResult<MountStatus> {
        if self.phase != ProviderPhase::Unmounted {
            let force = self.phase.next_broadcast_is_forced();
            let changed = port.set_hidden(self.id, self.hidden, force);
            return Ok(MountStatus::FlagsBroadcast { changed });
        }

        self.phase = ProviderPhase::Mounted;
        let values: Vec<&(CategoryKey, f64)> = self
            .data
            .iter()
            .filter(|(key, value)| {
                let finite = value.is_finite();
                if !finite {
                    warn!(series = %self.id, %key, value, "skipping non-finite bar value");
                }
                finite
            })
            .collect();
        if values.is_empty() {
            warn!(series = %self.id, "bar series mounted without data");
            return Ok(MountStatus::MissingData);
        }

        for (key, value) in &values {
            port.register_bar_value(self.id, key.clone(), *value, &self.color, self.hidden)?;
        }
        debug!(
            series = %self.id,
            submitted = self.data.len(),
            registered = values.len(),
            "bar series mounted"
        );
        Ok(MountStatus::Registered {
            points: values.len(),
        })
    }
}

/// Provider of one scatter series.
///
/// Samples are sorted by `x` and decimated against the surface width known at
/// mount time before they are registered, so axis bounds only see the kept
/// subset. Non-finite samples are skipped.
#[derive(Debug, Clone)]
pub struct ScatterDataSeries {
    id: SeriesId,
    data: Vec<ScatterPoint>,
    color: String,
    hidden: bool,
    connected: bool,
    phase: ProviderPhase,
}

impl ScatterDataSeries {
    #[must_use]
    pub fn new(data: impl IntoIterator<Item = ScatterPoint>) -> Self {
        Self {
            id: SeriesId::next(),
            data: data.into_iter().collect(),
            color: DEFAULT_SERIES_COLOR.to_owned(),
            hidden: false,
            connected: false,
            phase: ProviderPhase::Unmounted,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    #[must_use]
    pub fn with_connected(mut self, connected: bool) -> Self {
        self.connected = connected;
        self
    }

    #[must_use]
    pub fn id(&self) -> SeriesId {
        self.id
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    pub fn render<P: RegistrationPort + ?Sized>(&mut self, port: &mut P) -> ChartResult<MountStatus> {
        if self.phase != ProviderPhase::Unmounted {
            let force = self.phase.next_broadcast_is_forced();
            let hidden_changed = port.set_hidden(self.id, self.hidden, force);
            let connected_changed = port.set_connected(self.id, self.connected, force);
            return Ok(MountStatus::FlagsBroadcast {
                changed: hidden_changed || connected_changed,
            });
        }

        self.phase = ProviderPhase::Mounted;
        let finite: Vec<ScatterPoint> = self
            .data
            .iter()
            .copied()
            .filter(|point| {
                let finite = point.is_finite();
                if !finite {
                    warn!(series = %self.id, x = point.x, y = point.y, "skipping non-finite scatter point");
                }
                finite
            })
            .collect();
        if finite.is_empty() {
            warn!(series = %self.id, "scatter series mounted without data");
            return Ok(MountStatus::MissingData);
        }

        let width = port.surface_size().map_or(0, |surface| surface.width);
        let samples = decimate_points(&finite, width);
        for point in &samples {
            port.register_scatter_point(
                self.id,
                *point,
                &self.color,
                self.hidden,
                Some(self.connected),
            )?;
        }
        debug!(
            series = %self.id,
            submitted = self.data.len(),
            registered = samples.len(),
            "scatter series mounted"
        );
        Ok(MountStatus::Registered {
            points: samples.len(),
        })
    }
}
