use chartsy_rs::core::{
    AxisBounds, RoundDirection, adjust_axis_extreme, axis_ticks, compute_axis_bounds,
};
use proptest::prelude::*;

fn non_zero_magnitude() -> impl Strategy<Value = f64> {
    prop_oneof![-1.0e9f64..-1.0e-6, 1.0e-6f64..1.0e9]
}

proptest! {
    #[test]
    fn bounds_always_have_positive_span(
        values in prop::collection::vec(-1.0e6f64..1.0e6, 1..64)
    ) {
        let bounds = compute_axis_bounds(values.iter().copied(), None);
        prop_assert!(bounds.max() > bounds.min());
        for value in &values {
            prop_assert!(*value >= bounds.min() && *value <= bounds.max());
        }
    }

    #[test]
    fn adjuster_never_clips_toward_zero(value in non_zero_magnitude()) {
        prop_assert!(adjust_axis_extreme(value, RoundDirection::Up) >= value);
        prop_assert!(adjust_axis_extreme(value, RoundDirection::Down) <= value);
    }

    #[test]
    fn ticks_cover_bounds_with_two_to_eleven_values(
        min in -1.0e6f64..1.0e6,
        span in 0.5f64..1.0e6
    ) {
        let bounds = AxisBounds::new(min, min + span).expect("valid bounds");
        let ticks = axis_ticks(bounds);

        prop_assert!((2..=11).contains(&ticks.len()));
        prop_assert_eq!(ticks[0], bounds.min());
        prop_assert_eq!(ticks[ticks.len() - 1], bounds.max());
        for pair in ticks.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn registration_split_does_not_change_bounds(
        first in prop::collection::vec(-1.0e4f64..1.0e4, 1..16),
        second in prop::collection::vec(-1.0e4f64..1.0e4, 1..16),
        third in prop::collection::vec(-1.0e4f64..1.0e4, 1..16)
    ) {
        let front_loaded = compute_axis_bounds(
            first.iter().chain(&second).chain(&third).copied(),
            None,
        );
        let back_loaded = compute_axis_bounds(
            third.iter().chain(&first).chain(&second).copied(),
            None,
        );
        prop_assert_eq!(front_loaded, back_loaded);
    }
}
