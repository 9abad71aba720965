use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel size of the surface the host renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidSurface {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

static NEXT_SERIES_ID: AtomicU64 = AtomicU64::new(1);

/// Caller-held handle identifying one series for the lifetime of its provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(pub u64);

impl SeriesId {
    /// Allocates a process-unique id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_SERIES_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Label a bar value is grouped under. Text and numeric labels never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryKey {
    Number(OrderedFloat<f64>),
    Text(String),
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value.0),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for CategoryKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CategoryKey {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CategoryKey {
    fn from(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }
}

/// Largest integer magnitude an `f64` label represents exactly (2^53).
const MAX_EXACT_INTEGER_LABEL: i64 = 1 << 53;

/// Integer labels beyond `±2^53` are rejected instead of being rounded into
/// a neighbouring column.
impl TryFrom<i64> for CategoryKey {
    type Error = ChartError;

    fn try_from(value: i64) -> ChartResult<Self> {
        if value.unsigned_abs() > MAX_EXACT_INTEGER_LABEL.unsigned_abs() {
            return Err(ChartError::InvalidData(format!(
                "integer category label {value} is not exactly representable"
            )));
        }
        Ok(Self::Number(OrderedFloat(value as f64)))
    }
}

/// One scatter sample in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

impl ScatterPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Kind of chart an engine instance coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChartKind {
    /// Categorical X axis, one value axis.
    #[default]
    Bar,
    /// Two numeric axes.
    Scatter,
}

/// Padded, rounded visible range of one axis. Always `max > min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    min: f64,
    max: f64,
}

impl AxisBounds {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(ChartError::InvalidData(format!(
                "axis bounds must be finite with max > min (min={min}, max={max})"
            )));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Widens the bounds so they cover `clamp`. Never narrows.
    #[must_use]
    pub fn widened_to(self, clamp: AxisClamp) -> Self {
        Self {
            min: self.min.min(clamp.min),
            max: self.max.max(clamp.max),
        }
    }
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// Caller-supplied minimum visible range of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisClamp {
    pub min: f64,
    pub max: f64,
}

impl AxisClamp {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        Self { min, max }.validate()
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ChartError::InvalidData(
                "axis clamp must be finite with min <= max".to_owned(),
            ));
        }
        Ok(self)
    }
}
