//! Inner and outer bounding circles of the flagged point set.

use gridfit_core::{Circle, Point};
use serde::{Deserialize, Serialize};

use crate::grid::GridModel;

/// Circles about a fixed center touching the nearest and farthest flagged points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingCircles {
    /// Largest circle about the center with no flagged point strictly inside.
    pub inner: Circle,
    /// Smallest circle about the center containing every flagged point.
    pub outer: Circle,
}

/// Computes the inner/outer circles about `center` (grid space) through the
/// grid's flagged points. Returns `None` when nothing is flagged.
///
/// A single flagged point gives `inner.radius == outer.radius`. A flagged
/// point at the center itself gives a zero inner radius, which reads as an
/// invalid circle.
pub fn compute_bounding_circles(grid: &GridModel, center: Point) -> Option<BoundingCircles> {
    let (min_dist, max_dist) = grid
        .points()
        .iter()
        .filter(|p| p.flag)
        .map(|p| center.distance_to(&p.grid_position))
        .fold(None, |acc: Option<(f64, f64)>, d| match acc {
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
            None => Some((d, d)),
        })?;

    Some(BoundingCircles {
        inner: Circle::new(center, min_dist),
        outer: Circle::new(center, max_dist),
    })
}
