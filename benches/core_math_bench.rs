use chartsy_rs::api::{ChartEngine, ChartEngineConfig, ScatterDataSeries};
use chartsy_rs::core::{
    AxisBounds, ScatterPoint, SurfaceSize, axis_ticks, compute_axis_bounds, decimate_points,
};
use chartsy_rs::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sample_points(count: u32) -> Vec<ScatterPoint> {
    (0..count)
        .map(|i| {
            let x = f64::from(i);
            ScatterPoint::new(x, (x * 0.01).sin() * 250.0 + x * 0.05)
        })
        .collect()
}

fn bench_axis_bounds_10k(c: &mut Criterion) {
    let values: Vec<f64> = sample_points(10_000).iter().map(|p| p.y).collect();

    c.bench_function("axis_bounds_10k", |b| {
        b.iter(|| compute_axis_bounds(black_box(values.iter().copied()), None))
    });
}

fn bench_axis_ticks(c: &mut Criterion) {
    let bounds = AxisBounds::new(-1_500.0, 2_500_000.0).expect("valid bounds");

    c.bench_function("axis_ticks", |b| b.iter(|| axis_ticks(black_box(bounds))));
}

fn bench_decimation_100k(c: &mut Criterion) {
    let mut points = sample_points(100_000);
    points.reverse();

    c.bench_function("decimation_100k_to_1920px", |b| {
        b.iter(|| decimate_points(black_box(&points), black_box(1_920)))
    });
}

fn bench_connected_frame_derivation(c: &mut Criterion) {
    let config = ChartEngineConfig::scatter().with_surface(SurfaceSize::new(1_920, 1_080));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    let mut series = ScatterDataSeries::new(sample_points(20_000)).with_connected(true);
    series.render(&mut engine).expect("mount series");

    c.bench_function("connected_frame_derivation_20k", |b| {
        let mut hidden = false;
        b.iter(|| {
            hidden = !hidden;
            engine.set_hidden(series.id(), hidden, false);
            let _ = engine.frame().expect("frame should derive");
        })
    });
}

criterion_group!(
    benches,
    bench_axis_bounds_10k,
    bench_axis_ticks,
    bench_decimation_100k,
    bench_connected_frame_derivation
);
criterion_main!(benches);
