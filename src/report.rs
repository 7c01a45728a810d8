//! Plain-text rendering of grids and fitted shapes.

use gridfit_core::{Circle, EllipseShape};
use gridfit_grid::{BoundingCircles, GridModel};

const FLAGGED: char = '#';
const IDLE: char = '.';

/// One line per grid row, `#` for flagged points and `.` for idle ones,
/// columns separated by a space.
pub fn render_grid(grid: &GridModel) -> String {
    let size = grid.size();
    let mut out = String::with_capacity(size * size * 2);
    for row in 0..size {
        for col in 0..size {
            if col > 0 {
                out.push(' ');
            }
            out.push(if grid.is_flagged(row, col) { FLAGGED } else { IDLE });
        }
        out.push('\n');
    }
    out
}

pub fn describe_circle(circle: &Circle) -> String {
    format!("center {}, radius {:.4}", circle.center, circle.radius)
}

pub fn describe_ellipse(ellipse: &EllipseShape) -> String {
    format!(
        "center {}, semi-axes {:.4} / {:.4}, angle {:.2}°",
        ellipse.center,
        ellipse.semi_major,
        ellipse.semi_minor,
        ellipse.normalized_angle().to_degrees()
    )
}

pub fn describe_bounds(bounds: Option<&BoundingCircles>) -> String {
    match bounds {
        Some(b) => format!(
            "inner: radius {:.4}\nouter: radius {:.4}",
            b.inner.radius, b.outer.radius
        ),
        None => "no points flagged".to_string(),
    }
}
