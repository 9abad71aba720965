use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::AxisBounds;

/// Upper bound on the number of intervals between ticks.
pub const MAX_TICK_STEPS: usize = 10;

/// Tick values along one axis, first equal to `min`, last equal to `max`.
pub type AxisTicks = SmallVec<[f64; MAX_TICK_STEPS + 1]>;

/// Locale used for tick label separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisLabelLocale {
    /// `1,234` and `0.25`.
    #[default]
    EnUs,
    /// `1.234` and `0,25`.
    EsEs,
}

impl AxisLabelLocale {
    const fn group_separator(self) -> char {
        match self {
            Self::EnUs => ',',
            Self::EsEs => '.',
        }
    }

    const fn decimal_separator(self) -> char {
        match self {
            Self::EnUs => '.',
            Self::EsEs => ',',
        }
    }
}

/// Number of intervals used to split `span`: one per ten units on wide axes,
/// one per tenth of a unit on narrow ones, capped at [`MAX_TICK_STEPS`].
#[must_use]
pub fn tick_step_count(span: f64) -> usize {
    if !span.is_finite() || span <= 0.0 {
        return 1;
    }
    let raw = if span > 10.0 {
        (span / 10.0).ceil()
    } else {
        (span * 10.0).ceil()
    };
    (raw as usize).clamp(1, MAX_TICK_STEPS)
}

/// Evenly spaced ticks covering `bounds` inclusively (2 to 11 values).
#[must_use]
pub fn axis_ticks(bounds: AxisBounds) -> AxisTicks {
    let step_count = tick_step_count(bounds.span());
    let step_size = bounds.span() / step_count as f64;

    let mut ticks = AxisTicks::new();
    for index in 0..step_count {
        ticks.push(bounds.min() + index as f64 * step_size);
    }
    ticks.push(bounds.max());
    ticks
}

/// Display text for a tick value.
///
/// Zero and values beyond `±1` render as grouped integers; everything else
/// keeps two decimals.
#[must_use]
pub fn format_tick_label(value: f64, locale: AxisLabelLocale) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 || value.abs() > 1.0 {
        return format_grouped_integer(value.round(), locale);
    }

    let text = format!("{value:.2}");
    match locale {
        AxisLabelLocale::EnUs => text,
        AxisLabelLocale::EsEs => text.replace('.', &locale.decimal_separator().to_string()),
    }
}

fn format_grouped_integer(value: f64, locale: AxisLabelLocale) -> String {
    let digits = format!("{:.0}", value.abs());
    let separator = locale.group_separator();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
