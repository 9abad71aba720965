use serde::{Deserialize, Serialize};

use crate::core::{AxisClamp, AxisLabelLocale, ChartKind, SurfaceSize};
use crate::error::{ChartError, ChartResult};

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist chart setup next to their own settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub kind: ChartKind,
    #[serde(default)]
    pub surface: Option<SurfaceSize>,
    #[serde(default)]
    pub value_clamp: Option<AxisClamp>,
    #[serde(default)]
    pub x_clamp: Option<AxisClamp>,
    #[serde(default)]
    pub tick_label_locale: AxisLabelLocale,
}

impl ChartEngineConfig {
    /// Creates a config without surface size or clamps.
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            surface: None,
            value_clamp: None,
            x_clamp: None,
            tick_label_locale: AxisLabelLocale::default(),
        }
    }

    #[must_use]
    pub fn bar() -> Self {
        Self::new(ChartKind::Bar)
    }

    #[must_use]
    pub fn scatter() -> Self {
        Self::new(ChartKind::Scatter)
    }

    /// Sets the initial render surface size.
    #[must_use]
    pub fn with_surface(mut self, surface: SurfaceSize) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Sets the minimum visible range of the value axis.
    #[must_use]
    pub fn with_value_clamp(mut self, min: f64, max: f64) -> Self {
        self.value_clamp = Some(AxisClamp { min, max });
        self
    }

    /// Sets the minimum visible range of the scatter X axis.
    #[must_use]
    pub fn with_x_clamp(mut self, min: f64, max: f64) -> Self {
        self.x_clamp = Some(AxisClamp { min, max });
        self
    }

    #[must_use]
    pub fn with_tick_label_locale(mut self, locale: AxisLabelLocale) -> Self {
        self.tick_label_locale = locale;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if let Some(surface) = self.surface {
            surface.validate()?;
        }
        if let Some(clamp) = self.value_clamp {
            clamp.validate()?;
        }
        if let Some(clamp) = self.x_clamp {
            if self.kind != ChartKind::Scatter {
                return Err(ChartError::InvalidData(
                    "x clamp only applies to scatter charts".to_owned(),
                ));
            }
            clamp.validate()?;
        }
        Ok(self)
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}
