use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::core::{AxisClamp, ChartKind, SurfaceSize};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

mod data_controller;
mod engine_config;
mod engine_snapshot;
mod frame_builder;
mod frame_cache;
mod series_provider;
mod series_registry;
mod snapshot_controller;

pub use engine_config::ChartEngineConfig;
pub use engine_snapshot::{EngineSnapshot, SeriesSnapshot};
pub use frame_cache::FrameCacheStats;
pub use series_provider::{
    BarDataSeries, DEFAULT_SERIES_COLOR, MountStatus, RegistrationPort, ScatterDataSeries,
};
pub use series_registry::{
    BarPoint, ScatterSample, SeriesPoints, SeriesRecord, SeriesRegistry,
};

use frame_builder::{DerivationInputs, derive_frame};
use frame_cache::{FrameCache, FrameCacheKey};

/// Chart engine facade.
///
/// Owns the series registry and the hidden/connected flags exclusively;
/// providers reach them only through the [`RegistrationPort`] methods.
/// Derived state is recomputed from scratch whenever the registry revision,
/// surface size or clamps change, and memoized otherwise.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    registry: SeriesRegistry,
    frame_cache: RefCell<FrameCache>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            config,
            registry: SeriesRegistry::new(config.kind),
            frame_cache: RefCell::new(FrameCache::default()),
        })
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.config.kind
    }

    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    #[must_use]
    pub fn registry(&self) -> &SeriesRegistry {
        &self.registry
    }

    #[must_use]
    pub fn surface_size(&self) -> Option<SurfaceSize> {
        self.config.surface
    }

    /// Pushes the current render surface size, typically from a resize event.
    pub fn set_surface_size(&mut self, surface: SurfaceSize) -> ChartResult<()> {
        self.config.surface = Some(surface.validate()?);
        trace!(width = surface.width, height = surface.height, "surface resized");
        Ok(())
    }

    /// Sets or clears the widen-only clamp of the value axis.
    pub fn set_value_clamp(&mut self, clamp: Option<AxisClamp>) -> ChartResult<()> {
        self.config.value_clamp = clamp.map(AxisClamp::validate).transpose()?;
        Ok(())
    }

    /// Sets or clears the widen-only clamp of the scatter X axis.
    pub fn set_x_clamp(&mut self, clamp: Option<AxisClamp>) -> ChartResult<()> {
        if clamp.is_some() && self.config.kind != ChartKind::Scatter {
            return Err(ChartError::InvalidData(
                "x clamp only applies to scatter charts".to_owned(),
            ));
        }
        self.config.x_clamp = clamp.map(AxisClamp::validate).transpose()?;
        Ok(())
    }

    /// Returns derived bounds, ticks and geometry for the current state.
    ///
    /// Repeated calls without intervening mutations return the cached frame.
    pub fn frame(&self) -> ChartResult<Rc<RenderFrame>> {
        let inputs = self.derivation_inputs();
        let key = FrameCacheKey {
            revision: self.registry.revision(),
            inputs,
        };

        if let Some(frame) = self.frame_cache.borrow_mut().get(key) {
            trace!(revision = key.revision, "derived frame cache hit");
            return Ok(frame);
        }

        let frame = derive_frame(&self.registry, inputs)?;
        trace!(
            revision = key.revision,
            series = self.registry.len(),
            "derived frame recomputed"
        );
        Ok(self.frame_cache.borrow_mut().insert(key, frame))
    }

    #[must_use]
    pub fn frame_cache_stats(&self) -> FrameCacheStats {
        self.frame_cache.borrow().stats()
    }

    /// Hands the current derived frame to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn derivation_inputs(&self) -> DerivationInputs {
        DerivationInputs {
            surface: self.config.surface,
            value_clamp: self.config.value_clamp,
            x_clamp: self.config.x_clamp,
            locale: self.config.tick_label_locale,
        }
    }
}
