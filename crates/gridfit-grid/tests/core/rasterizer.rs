use gridfit_core::constants::RASTER_THRESHOLD;
use gridfit_core::{Circle, Point};
use gridfit_grid::{CircleRasterizer, GridModel, ScanWindow};
use proptest::prelude::*;

fn grid() -> GridModel {
    GridModel::new(20, 800, 800, 50)
}

fn flags(grid: &GridModel) -> Vec<bool> {
    grid.points().iter().map(|p| p.flag).collect()
}

fn seeded(seed: &[bool]) -> GridModel {
    let mut g = grid();
    for (i, &flag) in seed.iter().enumerate() {
        g.set_flag(i / 20, i % 20, flag).unwrap();
    }
    g
}

#[test]
fn test_centered_circle_ring() {
    let mut g = grid();
    let circle = Circle::new(Point::new(10.0, 10.0), 5.0);
    CircleRasterizer::rasterize(&mut g, &circle);

    for (row, col) in [(10, 15), (10, 5), (15, 10), (5, 10)] {
        assert!(g.is_flagged(row, col), "({row}, {col}) should be on the ring");
    }
    assert!(!g.is_flagged(10, 10));

    for p in g.points() {
        let near = circle.distance_from_boundary(&p.grid_position) <= RASTER_THRESHOLD;
        assert_eq!(p.flag, near, "mismatch at {}", p.grid_position);
    }

    // Symmetric about both axes through the center
    assert_eq!(g.flagged_count() % 4, 0);
}

#[test]
fn test_rasterize_replaces_previous_flags() {
    let mut g = grid();
    g.toggle(0, 0);
    g.toggle(19, 19);
    CircleRasterizer::rasterize(&mut g, &Circle::new(Point::new(10.0, 10.0), 3.0));
    assert!(!g.is_flagged(0, 0));
    assert!(!g.is_flagged(19, 19));

    g.toggle(0, 0);
    CircleRasterizer::rasterize_bounded(&mut g, &Circle::new(Point::new(10.0, 10.0), 3.0));
    assert!(!g.is_flagged(0, 0));
}

#[test]
fn test_invalid_circle_is_noop() {
    let mut g = grid();
    g.toggle(2, 3);
    g.toggle(7, 11);
    let before = flags(&g);

    for radius in [0.0, -4.0] {
        let circle = Circle::new(Point::new(5.0, 5.0), radius);
        CircleRasterizer::rasterize(&mut g, &circle);
        assert_eq!(flags(&g), before);
        CircleRasterizer::rasterize_bounded(&mut g, &circle);
        assert_eq!(flags(&g), before);
    }
}

#[test]
fn test_circle_off_grid_clears_everything() {
    let circle = Circle::new(Point::new(-50.0, -50.0), 3.0);
    assert!(ScanWindow::for_circle(&circle, 20).is_empty());

    let mut full = grid();
    full.toggle(4, 4);
    let mut bounded = full.clone();

    CircleRasterizer::rasterize(&mut full, &circle);
    CircleRasterizer::rasterize_bounded(&mut bounded, &circle);
    assert_eq!(full.flagged_count(), 0);
    assert_eq!(bounded.flagged_count(), 0);
}

#[test]
fn test_scan_window_is_clamped() {
    let window = ScanWindow::for_circle(&Circle::new(Point::new(1.0, 18.0), 4.0), 20);
    assert_eq!(window.min_row, 13);
    assert_eq!(window.max_row, 19);
    assert_eq!(window.min_col, 0);
    assert_eq!(window.max_col, 6);
    assert!(window.contains(19, 0));
    assert!(!window.contains(12, 0));
    assert!(!window.contains(13, 7));
}

proptest! {
    #[test]
    fn prop_bounded_matches_full_scan(
        cx in -30.0f64..50.0,
        cy in -30.0f64..50.0,
        radius in 0.01f64..40.0,
        seed in prop::collection::vec(any::<bool>(), 400),
    ) {
        let circle = Circle::new(Point::new(cx, cy), radius);
        let mut full = seeded(&seed);
        let mut bounded = seeded(&seed);

        CircleRasterizer::rasterize(&mut full, &circle);
        CircleRasterizer::rasterize_bounded(&mut bounded, &circle);

        prop_assert_eq!(flags(&full), flags(&bounded));
    }

    #[test]
    fn prop_rasterize_is_idempotent(
        cx in 0.0f64..19.0,
        cy in 0.0f64..19.0,
        radius in 0.5f64..12.0,
    ) {
        let circle = Circle::new(Point::new(cx, cy), radius);
        let mut g = grid();
        CircleRasterizer::rasterize_bounded(&mut g, &circle);
        let first = flags(&g);
        CircleRasterizer::rasterize_bounded(&mut g, &circle);
        prop_assert_eq!(first, flags(&g));
    }

    /// Every boundary point inside the grid has its nearest grid vertex flagged,
    /// so a circle crossing the grid always flags something.
    #[test]
    fn prop_ring_has_no_gaps(
        cx in -10.0f64..=29.0,
        cy in -10.0f64..=29.0,
        radius in (RASTER_THRESHOLD + 1e-6)..=15.0,
    ) {
        let circle = Circle::new(Point::new(cx, cy), radius);
        let mut g = grid();
        CircleRasterizer::rasterize_bounded(&mut g, &circle);

        let mut crossed = false;
        for step in 0..720 {
            let theta = step as f64 * std::f64::consts::TAU / 720.0;
            let q = Point::new(cx + radius * theta.cos(), cy + radius * theta.sin());
            if !(0.0..=19.0).contains(&q.x) || !(0.0..=19.0).contains(&q.y) {
                continue;
            }
            let (row, col) = (q.y.round() as usize, q.x.round() as usize);
            prop_assert!(
                g.is_flagged(row, col),
                "gap near boundary point {} (vertex row {}, col {})", q, row, col
            );
            crossed = true;
        }
        if crossed {
            prop_assert!(g.flagged_count() > 0);
        }
    }
}
