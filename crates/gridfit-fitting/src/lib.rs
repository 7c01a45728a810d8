//! # GridFit Fitting
//!
//! Best-fit shapes through a set of 2D points.
//!
//! - [`circle`] - algebraic (Pratt) circle fit with a damped Newton root solve
//! - [`ellipse`] - covariance-based ellipse estimate
//! - [`moments`] - centered moment accumulation shared by both fitters
//!
//! Each fitter comes in two forms. `fit_*` returns the shape directly and
//! signals failure with an invalid sentinel; `try_fit_*` returns a
//! [`FitError`](gridfit_core::FitError) describing why the fit was rejected.

pub mod circle;
pub mod ellipse;
pub mod moments;

pub use circle::{fit_circle, try_fit_circle};
pub use ellipse::{fit_ellipse, try_fit_ellipse};
pub use moments::CenteredMoments;
