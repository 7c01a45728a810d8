//! Error handling for GridFit
//!
//! Provides the error types for the numerical and grid layers:
//! - Fit errors (why a circle or ellipse could not be estimated)
//! - Grid errors (invalid grid construction parameters, bad indices)
//!
//! The public fitting API also exposes sentinel forms (a zero-radius circle,
//! an invalid ellipse); these error types carry the failure kind for callers
//! that want it. All error types use `thiserror`.

use thiserror::Error;

/// Fit error type
///
/// Represents the reasons a best-fit circle or ellipse was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    /// Not enough input points for the requested shape
    #[error("Not enough points: need at least {needed}, got {got}")]
    InsufficientPoints {
        /// Minimum number of points the fitter accepts.
        needed: usize,
        /// Number of points supplied.
        got: usize,
    },

    /// The point cloud is (nearly) collinear
    #[error("Points are collinear (determinant {det:e})")]
    Collinear {
        /// The determinant that failed the threshold test.
        det: f64,
    },

    /// A fitted value was NaN or infinite
    #[error("Fit produced a non-finite {quantity}")]
    NonFinite {
        /// Name of the offending quantity.
        quantity: &'static str,
    },

    /// A fitted radius or axis was zero or negative
    #[error("Fit produced a non-positive {quantity}: {value}")]
    NonPositive {
        /// Name of the offending quantity.
        quantity: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A fitted radius or axis exceeded the sanity bound
    #[error("Fit produced {quantity} {value} above limit {limit}")]
    OutOfBounds {
        /// Name of the offending quantity.
        quantity: &'static str,
        /// The rejected value.
        value: f64,
        /// The sanity bound.
        limit: f64,
    },
}

impl FitError {
    /// Check if the failure was caused by too few input points
    pub fn is_insufficient_points(&self) -> bool {
        matches!(self, FitError::InsufficientPoints { .. })
    }

    /// Check if the failure was caused by degenerate geometry
    pub fn is_degenerate(&self) -> bool {
        matches!(self, FitError::Collinear { .. })
    }
}

/// Grid error type
///
/// Represents invalid grid construction parameters and index errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Grid must have at least two points per side
    #[error("Grid size must be at least 2, got {size}")]
    GridTooSmall {
        /// The rejected grid size.
        size: usize,
    },

    /// Canvas dimensions must be positive
    #[error("Canvas dimensions must be positive, got {width}x{height}")]
    InvalidCanvas {
        /// Canvas width in drawing units.
        width: u32,
        /// Canvas height in drawing units.
        height: u32,
    },

    /// Padding leaves no room for the grid
    #[error("Padding {padding} must be less than half of the smaller canvas side ({limit})")]
    PaddingTooLarge {
        /// The rejected padding.
        padding: u32,
        /// Half of the smaller canvas dimension.
        limit: f64,
    },

    /// Row or column outside the grid
    #[error("Grid index ({row}, {col}) out of range for size {size}")]
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid size.
        size: usize,
    },
}
