use tracing::debug;

use crate::core::{
    AxisBounds, AxisClamp, AxisLabelLocale, BarExtent, ChartKind, ScatterPoint, SurfaceSize,
    axis_ticks, bar_extent, bounds_from_extent, format_tick_label, normalize,
    normalize_vertical, project_line_segments,
};
use crate::error::ChartResult;
use crate::render::{
    AxisFrame, AxisTick, BarColumn, BarGeometry, MarkerGeometry, RenderFrame, ScatterSeriesFrame,
    SegmentGeometry,
};

use super::series_registry::{SeriesPoints, SeriesRegistry};

/// Everything besides the registry that derived state depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct DerivationInputs {
    pub(super) surface: Option<SurfaceSize>,
    pub(super) value_clamp: Option<AxisClamp>,
    pub(super) x_clamp: Option<AxisClamp>,
    pub(super) locale: AxisLabelLocale,
}

/// Recomputes bounds, ticks and geometry from scratch.
///
/// Pure in its inputs: calling it twice with the same registry revision and
/// inputs yields equal frames.
pub(super) fn derive_frame(
    registry: &SeriesRegistry,
    inputs: DerivationInputs,
) -> ChartResult<RenderFrame> {
    let value_bounds = bounds_from_extent(registry.value_extent(), inputs.value_clamp);
    let value_axis = axis_frame(value_bounds, true, inputs.locale);

    match registry.kind() {
        ChartKind::Bar => Ok(RenderFrame {
            kind: ChartKind::Bar,
            surface: inputs.surface,
            value_axis,
            x_axis: None,
            bar_columns: bar_columns(registry, value_bounds),
            scatter_series: Vec::new(),
        }),
        ChartKind::Scatter => {
            let x_bounds = bounds_from_extent(registry.x_extent(), inputs.x_clamp);
            let scatter_series = scatter_series(registry, x_bounds, value_bounds, inputs.surface)?;
            Ok(RenderFrame {
                kind: ChartKind::Scatter,
                surface: inputs.surface,
                value_axis,
                x_axis: Some(axis_frame(x_bounds, false, inputs.locale)),
                bar_columns: Vec::new(),
                scatter_series,
            })
        }
    }
}

fn axis_frame(bounds: AxisBounds, vertical: bool, locale: AxisLabelLocale) -> AxisFrame {
    let ticks = axis_ticks(bounds)
        .into_iter()
        .map(|value| AxisTick {
            value,
            offset: if vertical {
                normalize_vertical(value, bounds)
            } else {
                normalize(value, bounds)
            },
            label: format_tick_label(value, locale),
        })
        .collect();
    AxisFrame { bounds, ticks }
}

fn bar_columns(registry: &SeriesRegistry, bounds: AxisBounds) -> Vec<BarColumn> {
    registry
        .bar_columns()
        .map(|(key, bars)| BarColumn {
            key: key.clone(),
            bars: bars
                .into_iter()
                .map(|(series, point)| {
                    let hidden = registry.is_hidden(series);
                    BarGeometry {
                        series,
                        value: point.value,
                        color: point.color.clone(),
                        extent: if hidden {
                            BarExtent::COLLAPSED
                        } else {
                            bar_extent(point.value, bounds)
                        },
                        hidden,
                    }
                })
                .collect(),
        })
        .collect()
}

fn scatter_series(
    registry: &SeriesRegistry,
    x_bounds: AxisBounds,
    y_bounds: AxisBounds,
    surface: Option<SurfaceSize>,
) -> ChartResult<Vec<ScatterSeriesFrame>> {
    let mut frames = Vec::with_capacity(registry.len());
    for record in registry.records() {
        let SeriesPoints::Scatter(samples) = &record.points else {
            continue;
        };
        let hidden = registry.is_hidden(record.id);
        let connected = registry.is_connected(record.id);

        let markers = samples
            .iter()
            .map(|sample| MarkerGeometry {
                x: normalize(sample.point.x, x_bounds),
                y: normalize_vertical(sample.point.y, y_bounds),
                color: sample.color.clone(),
                visible: !hidden,
            })
            .collect();

        let segments = match (connected, surface) {
            (false, _) => Vec::new(),
            (true, None) => {
                debug!(series = %record.id, "connected series needs a surface size; skipping segments");
                Vec::new()
            }
            (true, Some(surface)) => {
                let points: Vec<ScatterPoint> = samples.iter().map(|s| s.point).collect();
                project_line_segments(&points, x_bounds, y_bounds, surface)?
                    .into_iter()
                    .zip(samples)
                    .map(|(mut segment, start)| {
                        if hidden {
                            segment.length = 0.0;
                        }
                        SegmentGeometry {
                            segment,
                            color: start.color.clone(),
                            visible: !hidden,
                        }
                    })
                    .collect()
            }
        };

        frames.push(ScatterSeriesFrame {
            series: record.id,
            hidden,
            connected,
            markers,
            segments,
        });
    }
    Ok(frames)
}
