use chartsy_rs::core::{ScatterPoint, decimate_points, decimation_stride};

#[test]
fn thousand_points_on_five_hundred_pixels_keep_every_second_point() {
    let points: Vec<ScatterPoint> = (0..1_000)
        .map(|i| ScatterPoint::new(f64::from(i), f64::from(i) * 0.5))
        .collect();

    let decimated = decimate_points(&points, 500);
    assert_eq!(decimated.len(), 500);
    assert_eq!(decimated[0], points[0]);
    assert_eq!(decimated[1], points[2]);
    assert_eq!(decimated[499], points[998]);
}

#[test]
fn series_that_fit_the_surface_are_kept_whole() {
    let points: Vec<ScatterPoint> = (0..300).map(|i| ScatterPoint::new(f64::from(i), 0.0)).collect();
    assert_eq!(decimate_points(&points, 500).len(), 300);
    assert_eq!(decimate_points(&points, 0).len(), 300);
}

#[test]
fn stride_rounds_to_nearest_whole_ratio() {
    assert_eq!(decimation_stride(600, 500), 1);
    assert_eq!(decimation_stride(1_300, 500), 3);
    assert_eq!(decimation_stride(1_000, 0), 1);
}

#[test]
fn unsorted_input_is_ordered_by_x_before_sampling() {
    let points = vec![
        ScatterPoint::new(3.0, 30.0),
        ScatterPoint::new(1.0, 10.0),
        ScatterPoint::new(2.0, 20.0),
        ScatterPoint::new(1.0, 11.0),
    ];

    let decimated = decimate_points(&points, 100);
    let ys: Vec<f64> = decimated.iter().map(|p| p.y).collect();
    assert_eq!(ys, vec![10.0, 11.0, 20.0, 30.0]);
}
