use serde::{Deserialize, Serialize};

use crate::core::{
    AxisBounds, BarExtent, CategoryKey, ChartKind, LineSegment, SeriesId, SurfaceSize,
};
use crate::error::{ChartError, ChartResult};

/// One labeled gridline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    /// Fraction along the axis; measured from the top edge on vertical axes.
    pub offset: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisFrame {
    pub bounds: AxisBounds,
    pub ticks: Vec<AxisTick>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub series: SeriesId,
    pub value: f64,
    pub color: String,
    pub extent: BarExtent,
    pub hidden: bool,
}

/// Bars sharing one category label, in registration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarColumn {
    pub key: CategoryKey,
    pub bars: Vec<BarGeometry>,
}

/// Marker position as fractions of the plot area (Y measured from the top).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerGeometry {
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub visible: bool,
}

/// Pixel-space connector. Hidden connectors keep their anchor and angle with
/// zero length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentGeometry {
    pub segment: LineSegment,
    pub color: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeriesFrame {
    pub series: SeriesId,
    pub hidden: bool,
    pub connected: bool,
    pub markers: Vec<MarkerGeometry>,
    pub segments: Vec<SegmentGeometry>,
}

/// Derived chart state handed to a renderer after every recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub kind: ChartKind,
    pub surface: Option<SurfaceSize>,
    /// Vertical value axis.
    pub value_axis: AxisFrame,
    /// Horizontal numeric axis; only scatter charts have one.
    pub x_axis: Option<AxisFrame>,
    pub bar_columns: Vec<BarColumn>,
    pub scatter_series: Vec<ScatterSeriesFrame>,
}

impl RenderFrame {
    /// `true` while no provider has contributed a point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bar_columns.is_empty() && self.scatter_series.is_empty()
    }

    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.bar_columns.iter().map(|column| column.bars.len()).sum()
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.scatter_series
            .iter()
            .map(|series| series.markers.len())
            .sum()
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.scatter_series
            .iter()
            .map(|series| series.segments.len())
            .sum()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some(surface) = self.surface {
            surface.validate()?;
        }

        validate_axis(&self.value_axis)?;
        if let Some(axis) = &self.x_axis {
            validate_axis(axis)?;
        }

        for bar in self.bar_columns.iter().flat_map(|column| &column.bars) {
            ensure_finite("bar", &[bar.value, bar.extent.top, bar.extent.height])?;
        }
        for series in &self.scatter_series {
            for marker in &series.markers {
                ensure_finite("marker", &[marker.x, marker.y])?;
            }
            for segment in &series.segments {
                let geometry = segment.segment;
                ensure_finite(
                    "segment",
                    &[geometry.x, geometry.y, geometry.length, geometry.angle_deg],
                )?;
            }
        }

        Ok(())
    }
}

fn validate_axis(axis: &AxisFrame) -> ChartResult<()> {
    if axis.ticks.len() < 2 {
        return Err(ChartError::InvalidData(
            "axis must carry at least two ticks".to_owned(),
        ));
    }
    for tick in &axis.ticks {
        ensure_finite("tick", &[tick.value, tick.offset])?;
    }
    Ok(())
}

fn ensure_finite(what: &str, values: &[f64]) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} geometry must be finite"
        )))
    }
}
