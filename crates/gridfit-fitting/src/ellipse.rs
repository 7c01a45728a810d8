//! Moment-based ellipse estimate.
//!
//! The center is the centroid. The orientation is the principal axis of the
//! covariance matrix, and each semi-axis is [`ELLIPSE_SPREAD`] standard
//! deviations along its principal direction.
//!
//! This is a fast heuristic, not a least-squares conic fit: points sampled
//! uniformly in angle around an ellipse with semi-axis `a` give a fitted
//! semi-axis of `√2·a`. Orientation and axis ratio are recovered exactly for
//! such samples.

use std::f64::consts::FRAC_PI_2;

use gridfit_core::constants::{
    ELLIPSE_DET_EPSILON, ELLIPSE_SPREAD, MAX_FIT_EXTENT, MIN_ELLIPSE_POINTS,
};
use gridfit_core::{EllipseShape, FitError, Point};
use tracing::debug;

use crate::moments::CenteredMoments;

/// Estimates an ellipse through `points`.
///
/// Returns [`EllipseShape::invalid`] when fewer than five points are given,
/// the points are collinear, or the result is non-finite, non-positive, or
/// larger than `10000` along either axis.
pub fn fit_ellipse(points: &[Point]) -> EllipseShape {
    try_fit_ellipse(points).unwrap_or_else(|err| {
        debug!("Ellipse fit rejected: {}", err);
        EllipseShape::invalid()
    })
}

/// Estimates an ellipse through `points`, reporting why a fit was rejected.
pub fn try_fit_ellipse(points: &[Point]) -> Result<EllipseShape, FitError> {
    if points.len() < MIN_ELLIPSE_POINTS {
        return Err(FitError::InsufficientPoints {
            needed: MIN_ELLIPSE_POINTS,
            got: points.len(),
        });
    }

    let m = CenteredMoments::from_points(points);
    let det = m.scatter_determinant();
    if det.abs() < ELLIPSE_DET_EPSILON {
        return Err(FitError::Collinear { det });
    }

    let mut theta = 0.5 * (2.0 * m.mxy).atan2(m.mxx - m.myy);
    let (s, c) = theta.sin_cos();
    let var_major = m.mxx * c * c + m.myy * s * s + 2.0 * m.mxy * c * s;
    let var_minor = m.mxx * s * s + m.myy * c * c - 2.0 * m.mxy * c * s;

    let mut a = ELLIPSE_SPREAD * var_major.abs().sqrt();
    let mut b = ELLIPSE_SPREAD * var_minor.abs().sqrt();
    if b > a {
        std::mem::swap(&mut a, &mut b);
        theta += FRAC_PI_2;
    }

    debug!(
        "Ellipse estimate over {} points: center {}, axes {:.4}/{:.4}, angle {:.4}",
        points.len(),
        m.centroid,
        a,
        b,
        theta
    );

    if !m.centroid.is_finite() {
        return Err(FitError::NonFinite { quantity: "center" });
    }
    if !theta.is_finite() {
        return Err(FitError::NonFinite { quantity: "angle" });
    }
    for (quantity, value) in [("semi-major axis", a), ("semi-minor axis", b)] {
        if !value.is_finite() {
            return Err(FitError::NonFinite { quantity });
        }
        if value <= 0.0 {
            return Err(FitError::NonPositive { quantity, value });
        }
        if value > MAX_FIT_EXTENT {
            return Err(FitError::OutOfBounds {
                quantity,
                value,
                limit: MAX_FIT_EXTENT,
            });
        }
    }

    Ok(EllipseShape::new(m.centroid, a, b, theta))
}
