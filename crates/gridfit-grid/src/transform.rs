//! Coordinate transformation between grid space and drawing space.
//!
//! Grid space addresses grid vertices by (column, row) with unit spacing.
//! Drawing space is the continuous canvas the grid is laid out in. The mapping
//! is a uniform scale plus translation, fixed at construction.

use gridfit_core::{GridError, Point};

/// Affine mapping between grid-index space and drawing space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    spacing: f64,
    origin: Point,
    size: usize,
}

impl CoordinateTransform {
    /// Lays a `grid_size` × `grid_size` grid out in a canvas, leaving `padding`
    /// on every side and centering the grid along the longer canvas side.
    ///
    /// Formula:
    /// ```text
    /// available = canvas - 2 * padding            (per axis)
    /// spacing   = min(available_w, available_h) / (grid_size - 1)
    /// origin    = padding + (available - spacing * (grid_size - 1)) / 2
    /// ```
    ///
    /// Requires `grid_size >= 2` and `padding < min(width, height) / 2`; this is
    /// not checked here. Use [`CoordinateTransform::try_new`] for untrusted input.
    pub fn new(grid_size: usize, canvas_width: u32, canvas_height: u32, padding: u32) -> Self {
        let available_w = canvas_width as f64 - 2.0 * padding as f64;
        let available_h = canvas_height as f64 - 2.0 * padding as f64;
        let extent_cells = grid_size as f64 - 1.0;

        let spacing = available_w.min(available_h) / extent_cells;
        let extent = spacing * extent_cells;

        Self {
            spacing,
            origin: Point::new(
                padding as f64 + (available_w - extent) / 2.0,
                padding as f64 + (available_h - extent) / 2.0,
            ),
            size: grid_size,
        }
    }

    /// Checked constructor: validates the preconditions of [`CoordinateTransform::new`].
    pub fn try_new(
        grid_size: usize,
        canvas_width: u32,
        canvas_height: u32,
        padding: u32,
    ) -> Result<Self, GridError> {
        if grid_size < 2 {
            return Err(GridError::GridTooSmall { size: grid_size });
        }
        if canvas_width == 0 || canvas_height == 0 {
            return Err(GridError::InvalidCanvas {
                width: canvas_width,
                height: canvas_height,
            });
        }
        let limit = canvas_width.min(canvas_height) as f64 / 2.0;
        if padding as f64 >= limit {
            return Err(GridError::PaddingTooLarge { padding, limit });
        }
        Ok(Self::new(grid_size, canvas_width, canvas_height, padding))
    }

    /// Gets the drawing-space distance between adjacent grid points.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Gets the drawing-space position of grid point (0, 0).
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Gets the number of grid points per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Converts drawing coordinates to grid coordinates.
    pub fn to_logical(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.origin.x) / self.spacing,
            (p.y - self.origin.y) / self.spacing,
        )
    }

    /// Converts grid coordinates to drawing coordinates.
    pub fn to_physical(&self, p: Point) -> Point {
        Point::new(
            self.origin.x + p.x * self.spacing,
            self.origin.y + p.y * self.spacing,
        )
    }

    /// Converts a drawing-space length to grid units.
    pub fn scale_distance_to_logical(&self, d: f64) -> f64 {
        d / self.spacing
    }

    /// Converts a grid-space length to drawing units.
    pub fn scale_distance_to_physical(&self, d: f64) -> f64 {
        d * self.spacing
    }
}
