use serde::{Deserialize, Serialize};

use crate::core::range_adjuster::{RoundDirection, adjust_axis_extreme};
use crate::core::types::{AxisBounds, AxisClamp};

/// Outward padding applied to each raw extreme before rounding.
pub const AXIS_PADDING_RATIO: f64 = 0.10;

/// Raw extrema of an aggregate before padding and rounding.
///
/// An empty aggregate keeps the sentinels `max = -inf`, `min = +inf`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueExtent {
    pub min: f64,
    pub max: f64,
}

impl ValueExtent {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut extent = Self::empty();
        for value in values {
            extent.include(value);
        }
        extent
    }

    pub fn include(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        if value > self.max {
            self.max = value;
        }
        if value < self.min {
            self.min = value;
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.min > self.max
    }
}

impl Default for ValueExtent {
    fn default() -> Self {
        Self::empty()
    }
}

/// Computes padded, rounded axis bounds over every contributing value.
///
/// Hidden series must be included by the caller so toggling visibility never
/// moves the axis. An empty aggregate yields `{0, 1}` before the clamp is
/// applied.
#[must_use]
pub fn compute_axis_bounds<I>(values: I, clamp: Option<AxisClamp>) -> AxisBounds
where
    I: IntoIterator<Item = f64>,
{
    bounds_from_extent(ValueExtent::from_values(values), clamp)
}

#[must_use]
pub fn bounds_from_extent(extent: ValueExtent, clamp: Option<AxisClamp>) -> AxisBounds {
    let bounds = if extent.is_empty() {
        AxisBounds::default()
    } else {
        let (min, max) = round_extent(extent);
        // round_extent guarantees finite max > min for finite input.
        AxisBounds::new(min, max).unwrap_or_default()
    };

    match clamp {
        Some(clamp) => bounds.widened_to(clamp),
        None => bounds,
    }
}

fn round_extent(extent: ValueExtent) -> (f64, f64) {
    let mut max = pad_outward(extent.max, true);
    let mut min = pad_outward(extent.min, false);

    if max - min > 1.0 {
        if min > 0.0 {
            min = 0.0;
        }
        max = (max.ceil() / 10.0).ceil() * 10.0;
        min = (min.floor() / 10.0).floor() * 10.0;
    } else {
        max = round_max_to_half_unit(max);
        min = round_min_to_half_unit(min);
    }

    // Normalizes -0.0 so the equality check and labels stay stable.
    max += 0.0;
    min += 0.0;

    if max == min {
        max += 1.0;
    }

    if max >= 10.0 {
        max = adjust_axis_extreme(max, RoundDirection::Up);
    }
    if min <= -10.0 {
        min = adjust_axis_extreme(min, RoundDirection::Down);
    }

    (min, max)
}

fn pad_outward(value: f64, is_max: bool) -> f64 {
    let grow = 1.0 + AXIS_PADDING_RATIO;
    let shrink = 1.0 - AXIS_PADDING_RATIO;
    match (is_max, value > 0.0) {
        (true, true) | (false, false) => value * grow,
        (true, false) | (false, true) => value * shrink,
    }
}

/// Nearest half unit, ties toward positive infinity.
fn nearest_half_unit(value: f64) -> f64 {
    (value * 2.0 + 0.5).floor() / 2.0
}

fn round_max_to_half_unit(max: f64) -> f64 {
    let rounded = nearest_half_unit(max);
    if rounded > max { rounded } else { max.ceil() }
}

fn round_min_to_half_unit(min: f64) -> f64 {
    let rounded = nearest_half_unit(min);
    if rounded < min { rounded } else { min.floor() }
}
