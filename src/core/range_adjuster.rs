use serde::{Deserialize, Serialize};

/// Direction an axis extreme is snapped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundDirection {
    /// Toward positive infinity; used for maxima.
    Up,
    /// Toward negative infinity; used for minima.
    Down,
}

/// Lowest decimal exponent whose powers of ten are still non-zero in `f64`.
const MIN_DECIMAL_EXPONENT: i32 = -323;

/// Snaps `value` outward to a round boundary.
///
/// The step is the smallest power of ten `f` with `|value| / f <= 10`,
/// halved once it reaches 10, so maxima land on multiples of 5, 50, 500...
/// Snapped values are the nearest `f64` to the decimal boundary, so very
/// large axes still read `5e23` rather than an accumulated product.
/// Zero and non-finite inputs are returned unchanged.
#[must_use]
pub fn adjust_axis_extreme(value: f64, direction: RoundDirection) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }

    let exponent = rounding_exponent(value.abs());
    let (unit, step_exponent) = if exponent >= 1 {
        (5, exponent - 1)
    } else {
        (1, exponent)
    };
    let step = decimal(unit, step_exponent);

    let quotient = match direction {
        RoundDirection::Up => (value / step).ceil(),
        RoundDirection::Down => (value / step).floor(),
    };
    let multiple = quotient as i64;
    let mut snapped = decimal(multiple.saturating_mul(unit), step_exponent);

    // Division can round past an exact multiple; never clip the data.
    match direction {
        RoundDirection::Up if snapped < value => {
            snapped = decimal(multiple.saturating_add(1).saturating_mul(unit), step_exponent);
        }
        RoundDirection::Down if snapped > value => {
            snapped = decimal(multiple.saturating_sub(1).saturating_mul(unit), step_exponent);
        }
        _ => {}
    }

    // Normalizes -0.0 produced by ceil of small negatives.
    snapped + 0.0
}

/// Smallest `e` with `magnitude <= 10^(e + 1)`.
fn rounding_exponent(magnitude: f64) -> i32 {
    let mut exponent = (magnitude.log10().ceil() as i32 - 1).max(MIN_DECIMAL_EXPONENT);
    while magnitude > decimal(10, exponent) {
        exponent += 1;
    }
    while exponent > MIN_DECIMAL_EXPONENT && magnitude <= decimal(10, exponent - 1) {
        exponent -= 1;
    }
    exponent
}

/// `mantissa * 10^exponent`, correctly rounded.
fn decimal(mantissa: i64, exponent: i32) -> f64 {
    format!("{mantissa}e{exponent}")
        .parse()
        .unwrap_or_else(|_| mantissa as f64 * 10f64.powi(exponent))
}

#[cfg(test)]
mod tests {
    use super::{RoundDirection, adjust_axis_extreme, rounding_exponent};

    #[test]
    fn exponent_is_smallest_power_of_ten_within_ten_times() {
        assert_eq!(rounding_exponent(10.0), 0);
        assert_eq!(rounding_exponent(30.0), 1);
        assert_eq!(rounding_exponent(100.0), 1);
        assert_eq!(rounding_exponent(150.0), 2);
        assert_eq!(rounding_exponent(1_234_567.0), 6);
        assert_eq!(rounding_exponent(0.33), -1);
    }

    #[test]
    fn huge_extremes_land_on_exact_decimal_boundaries() {
        assert_eq!(adjust_axis_extreme(4.4e23, RoundDirection::Up), 4.5e23);
        assert_eq!(adjust_axis_extreme(2.2e24, RoundDirection::Up), 2.5e24);
        assert_eq!(adjust_axis_extreme(-3.3e30, RoundDirection::Down), -3.5e30);
    }

    #[test]
    fn large_maxima_snap_to_half_decades() {
        assert_eq!(adjust_axis_extreme(30.0, RoundDirection::Up), 30.0);
        assert_eq!(adjust_axis_extreme(33.0, RoundDirection::Up), 35.0);
        assert_eq!(adjust_axis_extreme(130.0, RoundDirection::Up), 150.0);
        assert_eq!(adjust_axis_extreme(1_210.0, RoundDirection::Up), 1_500.0);
        assert_eq!(adjust_axis_extreme(2_200_000.0, RoundDirection::Up), 2_500_000.0);
    }

    #[test]
    fn large_minima_snap_downward() {
        assert_eq!(adjust_axis_extreme(-10.0, RoundDirection::Down), -10.0);
        assert_eq!(adjust_axis_extreme(-130.0, RoundDirection::Down), -150.0);
        assert_eq!(adjust_axis_extreme(-1_210.0, RoundDirection::Down), -1_500.0);
    }

    #[test]
    fn zero_and_non_finite_pass_through() {
        assert_eq!(adjust_axis_extreme(0.0, RoundDirection::Up), 0.0);
        assert!(adjust_axis_extreme(f64::NAN, RoundDirection::Down).is_nan());
        assert_eq!(
            adjust_axis_extreme(f64::INFINITY, RoundDirection::Up),
            f64::INFINITY
        );
    }

    #[test]
    fn small_magnitudes_round_on_their_own_decade() {
        let up = adjust_axis_extreme(0.33, RoundDirection::Up);
        assert!(up >= 0.33);
        assert!((up - 0.4).abs() <= 1e-12);

        let down = adjust_axis_extreme(-0.33, RoundDirection::Down);
        assert!(down <= -0.33);
        assert!((down + 0.4).abs() <= 1e-12);
    }
}
