use gridfit_core::{Circle, FitError, Point};
use gridfit_fitting::{fit_circle, try_fit_circle};
use proptest::prelude::*;

fn sample_circle(center: Point, radius: f64, n: usize, phase: f64, sweep: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = phase + sweep * i as f64 / n as f64;
            Point::new(center.x + radius * t.cos(), center.y + radius * t.sin())
        })
        .collect()
}

fn assert_circle_close(fit: &Circle, center: Point, radius: f64, tol: f64) {
    assert!(fit.is_valid(), "expected a valid fit, got {:?}", fit);
    assert!(
        fit.center.distance_to(&center) < tol,
        "center {} too far from {}",
        fit.center,
        center
    );
    assert!(
        (fit.radius - radius).abs() < tol,
        "radius {} too far from {}",
        fit.radius,
        radius
    );
}

#[test]
fn test_exact_circle_recovered() {
    let center = Point::new(3.0, -2.0);
    let points = sample_circle(center, 5.0, 8, 0.0, std::f64::consts::TAU);
    assert_circle_close(&fit_circle(&points), center, 5.0, 1e-6);
}

#[test]
fn test_three_points_give_circumcircle() {
    let points = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0)];
    assert_circle_close(&fit_circle(&points), Point::new(2.0, 1.5), 2.5, 1e-6);
}

#[test]
fn test_partial_arc_recovered() {
    let center = Point::new(10.0, 10.0);
    let points = sample_circle(center, 7.5, 12, 0.3, std::f64::consts::FRAC_PI_2);
    assert_circle_close(&fit_circle(&points), center, 7.5, 1e-6);
}

#[test]
fn test_noisy_points_close_to_truth() {
    let center = Point::new(9.5, 10.0);
    let mut points = sample_circle(center, 6.0, 24, 0.1, std::f64::consts::TAU);
    for (i, p) in points.iter_mut().enumerate() {
        let jitter = if i % 2 == 0 { 0.02 } else { -0.02 };
        p.x += jitter;
        p.y -= jitter * 0.5;
    }
    assert_circle_close(&fit_circle(&points), center, 6.0, 0.05);
}

#[test]
fn test_too_few_points() {
    let two = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
    assert!(!fit_circle(&two).is_valid());
    assert_eq!(
        try_fit_circle(&two),
        Err(FitError::InsufficientPoints { needed: 3, got: 2 })
    );
    assert!(!fit_circle(&[]).is_valid());
}

#[test]
fn test_collinear_points_rejected() {
    let horizontal = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
    let diagonal = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 2.0),
        Point::new(3.0, 3.0),
    ];

    for points in [&horizontal[..], &diagonal[..]] {
        let fit = fit_circle(points);
        assert!(!fit.is_valid());
        assert_eq!(fit.radius, 0.0);
        assert!(try_fit_circle(points).unwrap_err().is_degenerate());
    }
}

#[test]
fn test_coincident_points_rejected() {
    let points = [Point::new(4.0, 4.0); 5];
    assert!(!fit_circle(&points).is_valid());
}

#[test]
fn test_huge_radius_rejected() {
    let points = sample_circle(Point::new(0.0, 0.0), 15_000.0, 16, 0.0, std::f64::consts::TAU);
    let err = try_fit_circle(&points).unwrap_err();
    assert!(matches!(err, FitError::OutOfBounds { quantity: "radius", .. }));
    assert!(!fit_circle(&points).is_valid());
}

#[test]
fn test_fit_is_deterministic() {
    let points = [
        Point::new(2.0, 5.0),
        Point::new(5.0, 8.0),
        Point::new(8.0, 5.0),
        Point::new(5.0, 2.0),
        Point::new(7.0, 7.0),
    ];
    assert_eq!(fit_circle(&points), fit_circle(&points));
}

proptest! {
    #[test]
    fn prop_points_on_circle_are_recovered(
        cx in -50.0f64..50.0,
        cy in -50.0f64..50.0,
        radius in 0.5f64..100.0,
        n in 5usize..24,
        phase in 0.0f64..std::f64::consts::TAU,
    ) {
        let center = Point::new(cx, cy);
        let points = sample_circle(center, radius, n, phase, std::f64::consts::TAU);
        let fit = fit_circle(&points);

        prop_assert!(fit.is_valid());
        prop_assert!(fit.center.distance_to(&center) < 1e-6 * radius.max(1.0));
        prop_assert!((fit.radius - radius).abs() < 1e-6 * radius.max(1.0));
    }
}
