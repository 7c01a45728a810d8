//! Circle rasterization onto the point grid.
//!
//! A grid point is "on" the circle when its distance to the circle boundary is
//! at most [`RASTER_THRESHOLD`] grid units. Every unit cell the boundary passes
//! through then has a vertex within the threshold, so the flagged ring has no
//! gaps, while the ring stays one point thick along the axes.
//!
//! Two variants produce identical flag states for every input: a full scan, and
//! a scan restricted to the circle's integer bounding box which clears every
//! flag outside the box.

use gridfit_core::constants::RASTER_THRESHOLD;
use gridfit_core::Circle;
use tracing::debug;

use crate::grid::GridModel;

/// Inclusive row/column window of grid indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanWindow {
    pub min_row: i64,
    pub max_row: i64,
    pub min_col: i64,
    pub max_col: i64,
}

impl ScanWindow {
    /// Bounding box of `circle` widened by the threshold, clamped to the grid.
    ///
    /// The window can be empty (`min > max`) when the circle lies entirely off
    /// the grid.
    pub fn for_circle(circle: &Circle, size: usize) -> Self {
        let last = size as i64 - 1;
        let reach = circle.radius + RASTER_THRESHOLD;
        let c = circle.center;

        Self {
            min_row: ((c.y - reach).floor() as i64).max(0),
            max_row: ((c.y + reach).ceil() as i64).min(last),
            min_col: ((c.x - reach).floor() as i64).max(0),
            max_col: ((c.x + reach).ceil() as i64).min(last),
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        let (row, col) = (row as i64, col as i64);
        row >= self.min_row && row <= self.max_row && col >= self.min_col && col <= self.max_col
    }

    pub fn is_empty(&self) -> bool {
        self.min_row > self.max_row || self.min_col > self.max_col
    }
}

pub struct CircleRasterizer;

impl CircleRasterizer {
    /// Flags every grid point within the threshold of the circle boundary and
    /// clears all others. An invalid circle leaves the grid untouched.
    pub fn rasterize(grid: &mut GridModel, circle: &Circle) {
        if !circle.is_valid() {
            return;
        }

        let size = grid.size();
        for row in 0..size {
            for col in 0..size {
                if let Some(point) = grid.point_mut(row, col) {
                    point.flag = circle.is_point_near_boundary(&point.grid_position, RASTER_THRESHOLD);
                }
            }
        }
    }

    /// Same result as [`CircleRasterizer::rasterize`], evaluating the boundary
    /// distance only inside the circle's bounding box.
    pub fn rasterize_bounded(grid: &mut GridModel, circle: &Circle) {
        if !circle.is_valid() {
            return;
        }

        let size = grid.size();
        let window = ScanWindow::for_circle(circle, size);
        debug!(
            "Raster window rows {}..={} cols {}..={}",
            window.min_row, window.max_row, window.min_col, window.max_col
        );

        if !window.is_empty() {
            for row in window.min_row as usize..=window.max_row as usize {
                for col in window.min_col as usize..=window.max_col as usize {
                    if let Some(point) = grid.point_mut(row, col) {
                        point.flag =
                            circle.is_point_near_boundary(&point.grid_position, RASTER_THRESHOLD);
                    }
                }
            }
        }

        // Nothing outside the window can be within the threshold.
        for row in 0..size {
            for col in 0..size {
                if !window.contains(row, col) {
                    if let Some(point) = grid.point_mut(row, col) {
                        point.flag = false;
                    }
                }
            }
        }
    }
}
