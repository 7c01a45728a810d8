use std::f64::consts::{FRAC_PI_2, PI, SQRT_2, TAU};

use gridfit_core::{FitError, Point};
use gridfit_fitting::{fit_ellipse, try_fit_ellipse};

fn sample_ellipse(center: Point, a: f64, b: f64, angle: f64, n: usize) -> Vec<Point> {
    let (s, c) = angle.sin_cos();
    (0..n)
        .map(|i| {
            let t = TAU * i as f64 / n as f64;
            let (x, y) = (a * t.cos(), b * t.sin());
            Point::new(center.x + x * c - y * s, center.y + x * s + y * c)
        })
        .collect()
}

/// Angular distance between two axis orientations, which repeat every π.
fn orientation_error(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(PI);
    d.min(PI - d)
}

#[test]
fn test_axis_aligned_ellipse() {
    let center = Point::new(5.0, 4.0);
    let fit = fit_ellipse(&sample_ellipse(center, 8.0, 3.0, 0.0, 360));

    assert!(fit.valid);
    assert!(fit.center.distance_to(&center) < 1e-9);
    // Uniform angular samples spread to √2 times each semi-axis
    assert!((fit.semi_major - SQRT_2 * 8.0).abs() < 1e-9);
    assert!((fit.semi_minor - SQRT_2 * 3.0).abs() < 1e-9);
    assert!(orientation_error(fit.angle, 0.0) < 1e-9);
}

#[test]
fn test_rotated_ellipse_orientation_and_ratio() {
    let center = Point::new(-3.0, 12.0);
    let fit = fit_ellipse(&sample_ellipse(center, 10.0, 4.0, 0.5, 360));

    assert!(fit.valid);
    assert!(fit.center.distance_to(&center) < 1e-9);
    assert!((fit.semi_minor / fit.semi_major - 0.4).abs() < 1e-9);
    assert!(orientation_error(fit.angle, 0.5) < 1e-9);
}

#[test]
fn test_tall_ellipse_major_axis_is_vertical() {
    let fit = fit_ellipse(&sample_ellipse(Point::new(0.0, 0.0), 7.0, 3.0, FRAC_PI_2, 72));

    assert!(fit.valid);
    assert!(fit.semi_major >= fit.semi_minor);
    assert!((fit.semi_major - SQRT_2 * 7.0).abs() < 1e-9);
    assert!(orientation_error(fit.angle, FRAC_PI_2) < 1e-9);
}

#[test]
fn test_coarse_samples_keep_shape() {
    let fit = fit_ellipse(&sample_ellipse(Point::new(9.0, 9.0), 6.0, 2.0, 1.0, 12));
    assert!(fit.valid);
    assert!((fit.semi_minor / fit.semi_major - 1.0 / 3.0).abs() < 1e-6);
    assert!(orientation_error(fit.angle, 1.0) < 1e-6);
}

#[test]
fn test_too_few_points() {
    let points = sample_ellipse(Point::new(0.0, 0.0), 5.0, 2.0, 0.0, 4);
    assert!(!fit_ellipse(&points).valid);
    assert_eq!(
        try_fit_ellipse(&points),
        Err(FitError::InsufficientPoints { needed: 5, got: 4 })
    );
}

#[test]
fn test_collinear_points_rejected() {
    let points: Vec<Point> = (0..6).map(|i| Point::new(i as f64, 0.5 * i as f64)).collect();
    assert!(!fit_ellipse(&points).valid);
    assert!(try_fit_ellipse(&points).unwrap_err().is_degenerate());
}

#[test]
fn test_oversized_axis_rejected() {
    let points = sample_ellipse(Point::new(0.0, 0.0), 8_000.0, 100.0, 0.0, 36);
    let err = try_fit_ellipse(&points).unwrap_err();
    assert!(matches!(err, FitError::OutOfBounds { quantity: "semi-major axis", .. }));
}

#[test]
fn test_fit_is_deterministic() {
    let points = sample_ellipse(Point::new(2.0, 3.0), 5.0, 2.5, 0.7, 20);
    assert_eq!(fit_ellipse(&points), fit_ellipse(&points));
}
