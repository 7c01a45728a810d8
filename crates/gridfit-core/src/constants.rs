//! Algorithm constants shared across crates.

/// Maximum distance, in grid units, between a grid point and a circle boundary
/// for the point to be flagged by the rasterizer.
///
/// Half the diagonal of a unit cell: any boundary point inside a cell lies
/// within this distance of one of the cell's vertices.
pub const RASTER_THRESHOLD: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Minimum number of points accepted by the circle fitter.
pub const MIN_CIRCLE_POINTS: usize = 3;

/// Minimum number of points accepted by the ellipse fitter.
pub const MIN_ELLIPSE_POINTS: usize = 5;

/// Upper bound on a fitted radius or semi-axis.
pub const MAX_FIT_EXTENT: f64 = 10_000.0;

/// Iteration cap for the Newton solve in the circle fitter.
pub const NEWTON_MAX_ITERATIONS: usize = 20;

/// Relative step size below which the Newton solve is considered converged.
pub const NEWTON_EPSILON: f64 = 1e-12;

/// Determinant magnitude below which circle-fit input is treated as collinear.
pub const CIRCLE_DET_EPSILON: f64 = 1e-10;

/// Scatter-determinant magnitude below which ellipse-fit input is treated as collinear.
pub const ELLIPSE_DET_EPSILON: f64 = 1e-6;

/// Fixed spread multiplier turning principal standard deviations into semi-axes.
pub const ELLIPSE_SPREAD: f64 = 2.0;
