use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{CategoryKey, ChartKind, ScatterPoint, SeriesId, ValueExtent};
use crate::error::{ChartError, ChartResult};

/// One bar value contributed by a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPoint {
    pub key: CategoryKey,
    pub value: f64,
    pub color: String,
}

/// One scatter sample contributed by a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSample {
    pub point: ScatterPoint,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SeriesPoints {
    Bar(Vec<BarPoint>),
    Scatter(Vec<ScatterSample>),
}

impl SeriesPoints {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Bar(points) => points.len(),
            Self::Scatter(samples) => samples.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Points contributed by one provider, in submission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRecord {
    pub id: SeriesId,
    pub points: SeriesPoints,
}

/// Position of a bar inside its owning series record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct BarSlot {
    pub(super) series: SeriesId,
    pub(super) index: usize,
}

/// Aggregate store of every registered series plus per-series flags.
///
/// Records are created on first registration, appended to afterwards and
/// never removed. Every mutation that can change derived state bumps
/// `revision`, which keys the derived-frame cache.
#[derive(Debug)]
pub struct SeriesRegistry {
    kind: ChartKind,
    series: IndexMap<SeriesId, SeriesRecord>,
    categories: IndexMap<CategoryKey, Vec<BarSlot>>,
    hidden: IndexSet<SeriesId>,
    connected: IndexSet<SeriesId>,
    revision: u64,
}

impl SeriesRegistry {
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            series: IndexMap::new(),
            categories: IndexMap::new(),
            hidden: IndexSet::new(),
            connected: IndexSet::new(),
            revision: 0,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends a bar value to `series`, creating the record on first use.
    pub fn register_bar(
        &mut self,
        series: SeriesId,
        key: CategoryKey,
        value: f64,
        color: impl Into<String>,
        hidden: bool,
    ) -> ChartResult<()> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "bar value for series {series} must be finite"
            )));
        }
        self.ensure_kind(ChartKind::Bar)?;

        let record = self
            .series
            .entry(series)
            .or_insert_with(|| SeriesRecord {
                id: series,
                points: SeriesPoints::Bar(Vec::new()),
            });
        let SeriesPoints::Bar(points) = &mut record.points else {
            return Err(mismatched_series(series));
        };

        let index = points.len();
        points.push(BarPoint {
            key: key.clone(),
            value,
            color: color.into(),
        });
        self.categories
            .entry(key)
            .or_default()
            .push(BarSlot { series, index });

        toggle_membership(&mut self.hidden, series, hidden);
        self.revision = self.revision.wrapping_add(1);
        trace!(%series, value, hidden, revision = self.revision, "register bar value");
        Ok(())
    }

    /// Appends a scatter sample to `series`, creating the record on first use.
    ///
    /// `connected = None` leaves the current connection flag untouched.
    pub fn register_scatter(
        &mut self,
        series: SeriesId,
        point: ScatterPoint,
        color: impl Into<String>,
        hidden: bool,
        connected: Option<bool>,
    ) -> ChartResult<()> {
        if !point.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "scatter point for series {series} must be finite"
            )));
        }
        self.ensure_kind(ChartKind::Scatter)?;

        let record = self
            .series
            .entry(series)
            .or_insert_with(|| SeriesRecord {
                id: series,
                points: SeriesPoints::Scatter(Vec::new()),
            });
        let SeriesPoints::Scatter(samples) = &mut record.points else {
            return Err(mismatched_series(series));
        };
        samples.push(ScatterSample {
            point,
            color: color.into(),
        });

        toggle_membership(&mut self.hidden, series, hidden);
        if let Some(connected) = connected {
            toggle_membership(&mut self.connected, series, connected);
        }
        self.revision = self.revision.wrapping_add(1);
        trace!(
            %series,
            x = point.x,
            y = point.y,
            hidden,
            revision = self.revision,
            "register scatter point"
        );
        Ok(())
    }

    /// Updates the hidden flag. Returns `true` when dependents must recompute.
    ///
    /// Unknown series are ignored. An unchanged value only counts as a change
    /// when `force` is set.
    pub fn set_hidden(&mut self, series: SeriesId, hidden: bool, force: bool) -> bool {
        let Self {
            series: records,
            hidden: set,
            revision,
            ..
        } = self;
        apply_flag(records, set, revision, series, hidden, force, "hidden")
    }

    /// Updates the connected flag with the same rules as [`Self::set_hidden`].
    pub fn set_connected(&mut self, series: SeriesId, connected: bool, force: bool) -> bool {
        let Self {
            series: records,
            connected: set,
            revision,
            ..
        } = self;
        apply_flag(records, set, revision, series, connected, force, "connected")
    }

    #[must_use]
    pub fn is_hidden(&self, series: SeriesId) -> bool {
        self.hidden.contains(&series)
    }

    #[must_use]
    pub fn is_connected(&self, series: SeriesId) -> bool {
        self.connected.contains(&series)
    }

    #[must_use]
    pub fn series(&self, series: SeriesId) -> Option<&SeriesRecord> {
        self.series.get(&series)
    }

    /// Records in first-registration order.
    pub fn records(&self) -> impl Iterator<Item = &SeriesRecord> {
        self.series.values()
    }

    pub fn series_ids(&self) -> impl Iterator<Item = SeriesId> + '_ {
        self.series.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Bar columns in first-seen label order, bars in registration order.
    pub fn bar_columns(&self) -> impl Iterator<Item = (&CategoryKey, Vec<(SeriesId, &BarPoint)>)> {
        self.categories.iter().map(|(key, slots)| {
            let bars = slots
                .iter()
                .filter_map(|slot| self.bar_point(*slot).map(|point| (slot.series, point)))
                .collect();
            (key, bars)
        })
    }

    /// Extent of every value on the vertical axis, hidden series included.
    #[must_use]
    pub fn value_extent(&self) -> ValueExtent {
        let mut extent = ValueExtent::empty();
        for record in self.series.values() {
            match &record.points {
                SeriesPoints::Bar(points) => points.iter().for_each(|p| extent.include(p.value)),
                SeriesPoints::Scatter(samples) => {
                    samples.iter().for_each(|s| extent.include(s.point.y));
                }
            }
        }
        extent
    }

    /// Extent of scatter `x` values, hidden series included.
    #[must_use]
    pub fn x_extent(&self) -> ValueExtent {
        let mut extent = ValueExtent::empty();
        for record in self.series.values() {
            if let SeriesPoints::Scatter(samples) = &record.points {
                samples.iter().for_each(|s| extent.include(s.point.x));
            }
        }
        extent
    }

    fn bar_point(&self, slot: BarSlot) -> Option<&BarPoint> {
        match &self.series.get(&slot.series)?.points {
            SeriesPoints::Bar(points) => points.get(slot.index),
            SeriesPoints::Scatter(_) => None,
        }
    }

    fn ensure_kind(&self, requested: ChartKind) -> ChartResult<()> {
        if self.kind != requested {
            return Err(ChartError::InvalidData(format!(
                "{requested:?} points cannot be registered on a {:?} chart",
                self.kind
            )));
        }
        Ok(())
    }
}

fn mismatched_series(series: SeriesId) -> ChartError {
    ChartError::InvalidData(format!("series {series} already holds another point kind"))
}

fn toggle_membership(set: &mut IndexSet<SeriesId>, series: SeriesId, member: bool) -> bool {
    if member {
        set.insert(series)
    } else {
        set.shift_remove(&series)
    }
}

fn apply_flag(
    records: &IndexMap<SeriesId, SeriesRecord>,
    set: &mut IndexSet<SeriesId>,
    revision: &mut u64,
    series: SeriesId,
    value: bool,
    force: bool,
    flag: &'static str,
) -> bool {
    if !records.contains_key(&series) {
        debug!(%series, flag, "ignoring flag update for unknown series");
        return false;
    }

    let changed = toggle_membership(set, series, value);
    if !changed && !force {
        return false;
    }

    *revision = revision.wrapping_add(1);
    trace!(%series, flag, value, force, revision = *revision, "series flag updated");
    true
}

#[cfg(test)]
mod tests {
    use super::SeriesRegistry;
    use crate::core::{ChartKind, ScatterPoint, SeriesId};

    #[test]
    fn forced_flag_update_bumps_revision_without_state_change() {
        let mut registry = SeriesRegistry::new(ChartKind::Scatter);
        let id = SeriesId(7);
        registry
            .register_scatter(id, ScatterPoint::new(1.0, 2.0), "#888", false, None)
            .expect("register");
        let before = registry.revision();

        assert!(!registry.set_hidden(id, false, false));
        assert_eq!(registry.revision(), before);

        assert!(registry.set_hidden(id, false, true));
        assert_eq!(registry.revision(), before + 1);
        assert!(!registry.is_hidden(id));
    }

    #[test]
    fn mismatched_chart_kind_is_rejected() {
        let mut registry = SeriesRegistry::new(ChartKind::Bar);
        let result =
            registry.register_scatter(SeriesId(1), ScatterPoint::new(0.0, 0.0), "#888", false, None);
        assert!(result.is_err());
        assert!(registry.is_empty());
    }
}
