//! The point grid.
//!
//! Holds `size × size` points in row-major order. Each point caches its
//! position in grid space and drawing space; positions never change after
//! construction, only the per-point flag does.

use gridfit_core::{GridError, Point};

use crate::transform::CoordinateTransform;

/// A single addressable grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    /// Position in grid space: (column, row).
    pub grid_position: Point,
    /// Position in drawing space, derived once from the transform.
    pub draw_position: Point,
    /// Highlighted / selected state.
    pub flag: bool,
}

impl GridPoint {
    fn new(grid_position: Point, draw_position: Point) -> Self {
        Self {
            grid_position,
            draw_position,
            flag: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GridModel {
    points: Vec<GridPoint>,
    size: usize,
    transform: CoordinateTransform,
}

impl GridModel {
    /// Builds the grid and its transform. Same preconditions as
    /// [`CoordinateTransform::new`].
    pub fn new(size: usize, canvas_width: u32, canvas_height: u32, padding: u32) -> Self {
        Self::with_transform(CoordinateTransform::new(
            size,
            canvas_width,
            canvas_height,
            padding,
        ))
    }

    pub fn try_new(
        size: usize,
        canvas_width: u32,
        canvas_height: u32,
        padding: u32,
    ) -> Result<Self, GridError> {
        let transform = CoordinateTransform::try_new(size, canvas_width, canvas_height, padding)?;
        Ok(Self::with_transform(transform))
    }

    pub fn with_transform(transform: CoordinateTransform) -> Self {
        let size = transform.size();
        let mut points = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let grid_position = Point::new(col as f64, row as f64);
                points.push(GridPoint::new(
                    grid_position,
                    transform.to_physical(grid_position),
                ));
            }
        }

        Self {
            points,
            size,
            transform,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn transform(&self) -> &CoordinateTransform {
        &self.transform
    }

    /// All points in row-major order.
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    pub fn point(&self, row: usize, col: usize) -> Option<&GridPoint> {
        self.index(row, col).map(|i| &self.points[i])
    }

    pub fn point_mut(&mut self, row: usize, col: usize) -> Option<&mut GridPoint> {
        self.index(row, col).map(move |i| &mut self.points[i])
    }

    /// Returns `false` for out-of-range indices.
    pub fn is_flagged(&self, row: usize, col: usize) -> bool {
        self.point(row, col).is_some_and(|p| p.flag)
    }

    /// Flips the flag at (row, col) and returns the new state.
    /// Out-of-range indices are ignored and report `false`.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        match self.point_mut(row, col) {
            Some(point) => {
                point.flag = !point.flag;
                point.flag
            }
            None => false,
        }
    }

    pub fn set_flag(&mut self, row: usize, col: usize, flag: bool) -> Result<(), GridError> {
        let size = self.size;
        let point = self
            .point_mut(row, col)
            .ok_or(GridError::IndexOutOfRange { row, col, size })?;
        point.flag = flag;
        Ok(())
    }

    /// Clears every flag.
    pub fn reset_flags(&mut self) {
        for point in &mut self.points {
            point.flag = false;
        }
    }

    pub fn flagged_count(&self) -> usize {
        self.points.iter().filter(|p| p.flag).count()
    }

    /// Grid-space positions of flagged points, row-major.
    pub fn flagged_grid_points(&self) -> Vec<Point> {
        self.points
            .iter()
            .filter(|p| p.flag)
            .map(|p| p.grid_position)
            .collect()
    }

    /// Drawing-space positions of flagged points, row-major.
    pub fn flagged_draw_points(&self) -> Vec<Point> {
        self.points
            .iter()
            .filter(|p| p.flag)
            .map(|p| p.draw_position)
            .collect()
    }

    /// Hit-tests a drawing-space position against the grid.
    ///
    /// Returns the (row, col) of the nearest grid point if it lies inside the
    /// grid and within `hit_radius` drawing units of `draw_point`.
    pub fn index_at(&self, draw_point: Point, hit_radius: f64) -> Option<(usize, usize)> {
        let logical = self.transform.to_logical(draw_point);
        let col = logical.x.round();
        let row = logical.y.round();
        if !(col >= 0.0 && row >= 0.0) {
            return None;
        }

        let (row, col) = (row as usize, col as usize);
        let point = self.point(row, col)?;
        (point.draw_position.distance_to(&draw_point) <= hit_radius).then_some((row, col))
    }
}
