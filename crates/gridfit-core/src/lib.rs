//! # GridFit Core
//!
//! Core types, constants, and error handling for GridFit.
//! Provides the value types shared by the rasterizer, the fitters and the
//! interactive session layer.

pub mod constants;
pub mod error;
pub mod geometry;

pub use error::{FitError, GridError};
pub use geometry::{Circle, EllipseShape, Point};
