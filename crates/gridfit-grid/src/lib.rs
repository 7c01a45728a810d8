//! # GridFit Grid
//!
//! The discrete side of GridFit: an N×N grid of flaggable points laid out in a
//! drawing canvas, the affine mapping between grid-index space and drawing
//! space, and the operations that write and read the flags.
//!
//! - [`transform`] - grid ↔ drawing coordinate mapping
//! - [`grid`] - the point grid and its flags
//! - [`rasterizer`] - flagging the grid points nearest a circle boundary
//! - [`bounds`] - inner/outer circles about a center through the flagged set

pub mod bounds;
pub mod grid;
pub mod rasterizer;
pub mod transform;

pub use bounds::{compute_bounding_circles, BoundingCircles};
pub use grid::{GridModel, GridPoint};
pub use rasterizer::{CircleRasterizer, ScanWindow};
pub use transform::CoordinateTransform;
