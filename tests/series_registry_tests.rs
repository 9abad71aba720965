use chartsy_rs::api::{ChartEngine, ChartEngineConfig, SeriesPoints};
use chartsy_rs::core::{CategoryKey, ScatterPoint, SeriesId};
use chartsy_rs::render::NullRenderer;
use chartsy_rs::ChartError;

fn bar_engine() -> ChartEngine<NullRenderer> {
    ChartEngine::new(NullRenderer::default(), ChartEngineConfig::bar()).expect("engine init")
}

fn scatter_engine() -> ChartEngine<NullRenderer> {
    ChartEngine::new(NullRenderer::default(), ChartEngineConfig::scatter()).expect("engine init")
}

#[test]
fn repeated_registration_appends_to_the_same_series() {
    let mut engine = bar_engine();
    let id = SeriesId::next();
    engine.register_bar_value(id, "a", 10.0, "#f00", false).expect("a");
    engine.register_bar_value(id, "b", -5.0, "#f00", false).expect("b");
    engine.register_bar_value(id, "c", 20.0, "#f00", false).expect("c");

    assert_eq!(engine.series_ids(), vec![id]);
    let record = engine.series(id).expect("record exists");
    let SeriesPoints::Bar(points) = &record.points else {
        panic!("bar engine must store bar points");
    };
    let values: Vec<f64> = points.iter().map(|point| point.value).collect();
    assert_eq!(values, vec![10.0, -5.0, 20.0]);
}

#[test]
fn bar_columns_follow_first_seen_label_order() {
    let mut engine = bar_engine();
    let first = SeriesId::next();
    let second = SeriesId::next();
    engine.register_bar_value(first, "a", 1.0, "#111", false).expect("a1");
    engine.register_bar_value(first, "b", 2.0, "#111", false).expect("b1");
    engine.register_bar_value(second, "b", 3.0, "#222", false).expect("b2");
    let seven = CategoryKey::try_from(7_i64).expect("exact label");
    engine.register_bar_value(second, seven, 4.0, "#222", false).expect("7");

    let frame = engine.frame().expect("frame");
    let keys: Vec<CategoryKey> = frame.bar_columns.iter().map(|c| c.key.clone()).collect();
    assert_eq!(
        keys,
        vec![CategoryKey::from("a"), CategoryKey::from("b"), CategoryKey::from(7.0)]
    );

    let column_b: Vec<SeriesId> = frame.bar_columns[1].bars.iter().map(|bar| bar.series).collect();
    assert_eq!(column_b, vec![first, second]);
}

#[test]
fn set_hidden_is_idempotent_without_force() {
    let mut engine = bar_engine();
    let id = SeriesId::next();
    engine.register_bar_value(id, "a", 10.0, "#f00", false).expect("register");

    assert!(engine.set_hidden(id, true, false));
    let revision = engine.registry().revision();
    assert!(!engine.set_hidden(id, true, false));

    assert!(engine.is_hidden(id));
    assert_eq!(engine.registry().revision(), revision);
}

#[test]
fn forced_update_recomputes_even_when_value_is_unchanged() {
    let mut engine = scatter_engine();
    let id = SeriesId::next();
    engine
        .register_scatter_point(id, ScatterPoint::new(1.0, 1.0), "#0f0", false, None)
        .expect("register");

    let revision = engine.registry().revision();
    assert!(engine.set_connected(id, false, true));
    assert_eq!(engine.registry().revision(), revision + 1);
    assert!(!engine.is_connected(id));
}

#[test]
fn flag_updates_for_unknown_series_are_ignored() {
    let mut engine = bar_engine();
    let unknown = SeriesId::next();

    assert!(!engine.set_hidden(unknown, true, true));
    assert!(!engine.set_connected(unknown, true, false));
    assert!(!engine.is_hidden(unknown));
    assert_eq!(engine.registry().revision(), 0);
}

#[test]
fn registration_carries_hidden_and_connected_flags() {
    let mut engine = scatter_engine();
    let id = SeriesId::next();
    engine
        .register_scatter_point(id, ScatterPoint::new(0.0, 0.0), "#00f", true, Some(true))
        .expect("register");

    assert!(engine.is_hidden(id));
    assert!(engine.is_connected(id));

    engine
        .register_scatter_point(id, ScatterPoint::new(1.0, 1.0), "#00f", true, None)
        .expect("register");
    assert!(engine.is_connected(id));
}

#[test]
fn non_finite_values_are_rejected_without_side_effects() {
    let mut engine = bar_engine();
    let id = SeriesId::next();
    let err = engine
        .register_bar_value(id, "a", f64::NAN, "#f00", false)
        .expect_err("nan must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(engine.series_ids().is_empty());
}

#[test]
fn point_kind_must_match_chart_kind() {
    let mut engine = bar_engine();
    let err = engine
        .register_scatter_point(SeriesId::next(), ScatterPoint::new(0.0, 0.0), "#f00", false, None)
        .expect_err("scatter point on bar chart");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn integer_labels_beyond_exact_float_range_are_rejected() {
    let limit = 1_i64 << 53;
    assert_eq!(
        CategoryKey::try_from(limit).expect("limit is exact"),
        CategoryKey::from(9_007_199_254_740_992.0)
    );
    assert!(CategoryKey::try_from(limit + 1).is_err());
    assert!(CategoryKey::try_from(-limit - 1).is_err());
    assert!(CategoryKey::try_from(i64::MIN).is_err());
}
