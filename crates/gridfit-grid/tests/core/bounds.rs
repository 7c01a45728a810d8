use gridfit_core::constants::RASTER_THRESHOLD;
use gridfit_core::{Circle, Point};
use gridfit_grid::{compute_bounding_circles, CircleRasterizer, GridModel};

fn grid() -> GridModel {
    GridModel::new(20, 800, 800, 50)
}

#[test]
fn test_no_flags_gives_none() {
    assert!(compute_bounding_circles(&grid(), Point::new(10.0, 10.0)).is_none());
}

#[test]
fn test_single_flag_gives_equal_radii() {
    let mut g = grid();
    g.toggle(4, 3);

    let bounds = compute_bounding_circles(&g, Point::new(0.0, 0.0)).unwrap();
    assert_eq!(bounds.inner.radius, 5.0);
    assert_eq!(bounds.outer.radius, 5.0);
    assert_eq!(bounds.inner.center, Point::new(0.0, 0.0));
}

#[test]
fn test_flag_at_center_gives_invalid_inner() {
    let mut g = grid();
    g.toggle(10, 10);
    g.toggle(10, 13);

    let bounds = compute_bounding_circles(&g, Point::new(10.0, 10.0)).unwrap();
    assert!(!bounds.inner.is_valid());
    assert_eq!(bounds.outer.radius, 3.0);
}

#[test]
fn test_bounds_enclose_rasterized_ring() {
    let mut g = grid();
    let circle = Circle::new(Point::new(9.3, 10.6), 6.2);
    CircleRasterizer::rasterize_bounded(&mut g, &circle);

    let bounds = compute_bounding_circles(&g, circle.center).unwrap();
    assert!(bounds.inner.radius <= bounds.outer.radius);
    assert!(bounds.inner.radius >= circle.radius - RASTER_THRESHOLD);
    assert!(bounds.outer.radius <= circle.radius + RASTER_THRESHOLD);

    for p in g.points().iter().filter(|p| p.flag) {
        let d = circle.center.distance_to(&p.grid_position);
        assert!(d >= bounds.inner.radius && d <= bounds.outer.radius);
    }
}
