use gridfit_core::{GridError, Point};
use gridfit_grid::CoordinateTransform;

#[test]
fn test_square_canvas_spacing() {
    let t = CoordinateTransform::new(20, 800, 800, 50);
    assert!((t.spacing() - 700.0 / 19.0).abs() < 1e-12);
    assert!((t.spacing() - 36.84).abs() < 0.01);
    assert!(t.origin().distance_to(&Point::new(50.0, 50.0)) < 1e-9);
    assert_eq!(t.size(), 20);
}

#[test]
fn test_wide_canvas_is_centered_horizontally() {
    let t = CoordinateTransform::new(20, 1000, 600, 50);
    // 900x500 available; the shorter side decides the spacing
    assert!((t.spacing() - 500.0 / 19.0).abs() < 1e-12);
    assert!((t.origin().x - 250.0).abs() < 1e-9);
    assert!((t.origin().y - 50.0).abs() < 1e-9);

    // The last column lands symmetric to the first
    let last = t.to_physical(Point::new(19.0, 19.0));
    assert!((last.x - 750.0).abs() < 1e-9);
    assert!((last.y - 550.0).abs() < 1e-9);
}

#[test]
fn test_roundtrip_conversion() {
    let t = CoordinateTransform::new(20, 800, 600, 40);
    let grid_point = Point::new(7.25, 13.5);
    let roundtrip = t.to_logical(t.to_physical(grid_point));
    assert!((roundtrip.x - grid_point.x).abs() < 1e-9);
    assert!((roundtrip.y - grid_point.y).abs() < 1e-9);

    let drawn = Point::new(123.45, 456.78);
    let back = t.to_physical(t.to_logical(drawn));
    assert!((back.x - drawn.x).abs() < 1e-9);
    assert!((back.y - drawn.y).abs() < 1e-9);
}

#[test]
fn test_distance_scaling() {
    let t = CoordinateTransform::new(11, 300, 300, 50);
    assert_eq!(t.spacing(), 20.0);
    assert_eq!(t.scale_distance_to_physical(2.5), 50.0);
    assert_eq!(t.scale_distance_to_logical(50.0), 2.5);
}

#[test]
fn test_try_new_rejects_small_grid() {
    assert_eq!(
        CoordinateTransform::try_new(1, 800, 800, 50),
        Err(GridError::GridTooSmall { size: 1 })
    );
}

#[test]
fn test_try_new_rejects_oversized_padding() {
    let err = CoordinateTransform::try_new(20, 800, 600, 300).unwrap_err();
    assert!(matches!(err, GridError::PaddingTooLarge { padding: 300, .. }));
}

#[test]
fn test_try_new_rejects_empty_canvas() {
    let err = CoordinateTransform::try_new(20, 0, 600, 0).unwrap_err();
    assert!(matches!(err, GridError::InvalidCanvas { width: 0, height: 600 }));
}

#[test]
fn test_try_new_matches_new() {
    let checked = CoordinateTransform::try_new(20, 800, 800, 50).unwrap();
    assert_eq!(checked, CoordinateTransform::new(20, 800, 800, 50));
}
