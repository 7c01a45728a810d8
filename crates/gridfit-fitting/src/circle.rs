//! Algebraic circle fit (Pratt).
//!
//! Minimizes the algebraic distance of the points to a circle under the
//! Pratt normalization. The fit reduces to finding the smallest non-negative
//! root of the quartic characteristic polynomial
//!
//! ```text
//! P(x) = A0 + A1·x + A2·x² + 4·x⁴
//! ```
//!
//! whose coefficients are built from the centered moments. The root is found
//! by Newton iteration from `x = 0`; whenever the iteration stalls, diverges,
//! or steps negative the root falls back to `0`, which reduces the fit to the
//! plain Kåsa solution. The radius is the mean distance from the fitted center
//! to the input points.
//!
//! Points lying exactly on a circle recover it exactly (up to rounding).

use gridfit_core::constants::{
    CIRCLE_DET_EPSILON, MAX_FIT_EXTENT, MIN_CIRCLE_POINTS, NEWTON_EPSILON, NEWTON_MAX_ITERATIONS,
};
use gridfit_core::{Circle, FitError, Point};
use tracing::debug;

use crate::moments::CenteredMoments;

/// Starting residual for the Newton loop, larger than any real residual.
const INITIAL_RESIDUAL: f64 = 1e20;

/// Coefficients of the Pratt characteristic polynomial.
#[derive(Debug, Clone, Copy)]
struct PrattPolynomial {
    a0: f64,
    a1: f64,
    a2: f64,
    a22: f64,
}

impl PrattPolynomial {
    fn from_moments(m: &CenteredMoments) -> Self {
        let mz = m.mz();
        let cov_xy = m.cov_xy();
        let var_z = m.var_z();

        let a2 = 4.0 * cov_xy - 3.0 * mz * mz - m.mzz;
        let a1 = var_z * mz + 4.0 * cov_xy * mz + m.mxz * m.mxz + m.myz * m.myz;
        let a0 = m.mxz * (m.mxz * m.myy - m.myz * m.mxy)
            + m.myz * (m.myz * m.mxx - m.mxz * m.mxy)
            - var_z * cov_xy;

        Self {
            a0,
            a1,
            a2,
            a22: 2.0 * a2,
        }
    }

    fn value(&self, x: f64) -> f64 {
        self.a0 + x * (self.a1 + x * (self.a2 + 4.0 * x * x))
    }

    fn derivative(&self, x: f64) -> f64 {
        self.a1 + x * (self.a22 + 16.0 * x * x)
    }

    /// Newton iteration from zero. Returns `0` on divergence, on a negative
    /// step, or when the iteration cap is reached without converging.
    fn smallest_root(&self) -> f64 {
        let mut x = 0.0;
        let mut y_new = INITIAL_RESIDUAL;

        for iter in 0..NEWTON_MAX_ITERATIONS {
            let y_old = y_new;
            y_new = self.value(x);
            if y_new.abs() > y_old.abs() {
                debug!("Pratt Newton diverged at iteration {}", iter);
                return 0.0;
            }

            let x_old = x;
            x = x_old - y_new / self.derivative(x);
            if ((x - x_old) / x).abs() < NEWTON_EPSILON {
                break;
            }
            if iter + 1 >= NEWTON_MAX_ITERATIONS {
                x = 0.0;
            }
            if x < 0.0 {
                return 0.0;
            }
        }

        x
    }
}

/// Fits a circle through `points`.
///
/// Returns [`Circle::invalid`] (radius 0) when fewer than three points are
/// given, the points are collinear, or the result is non-finite or outside
/// `(0, 10000]`.
pub fn fit_circle(points: &[Point]) -> Circle {
    try_fit_circle(points).unwrap_or_else(|err| {
        debug!("Circle fit rejected: {}", err);
        Circle::invalid()
    })
}

/// Fits a circle through `points`, reporting why a fit was rejected.
pub fn try_fit_circle(points: &[Point]) -> Result<Circle, FitError> {
    if points.len() < MIN_CIRCLE_POINTS {
        return Err(FitError::InsufficientPoints {
            needed: MIN_CIRCLE_POINTS,
            got: points.len(),
        });
    }

    let m = CenteredMoments::from_points(points);
    let poly = PrattPolynomial::from_moments(&m);
    let x = poly.smallest_root();

    let det = x * x - x * m.mz() + m.cov_xy();
    if det.abs() < CIRCLE_DET_EPSILON {
        return Err(FitError::Collinear { det });
    }

    let center = Point::new(
        (m.mxz * (m.myy - x) - m.myz * m.mxy) / det / 2.0 + m.centroid.x,
        (m.myz * (m.mxx - x) - m.mxz * m.mxy) / det / 2.0 + m.centroid.y,
    );
    let radius =
        points.iter().map(|p| center.distance_to(p)).sum::<f64>() / points.len() as f64;

    debug!(
        "Pratt fit over {} points: root {:e}, center {}, radius {:.4}",
        points.len(),
        x,
        center,
        radius
    );

    if !center.is_finite() {
        return Err(FitError::NonFinite { quantity: "center" });
    }
    if !radius.is_finite() {
        return Err(FitError::NonFinite { quantity: "radius" });
    }
    if radius <= 0.0 {
        return Err(FitError::NonPositive {
            quantity: "radius",
            value: radius,
        });
    }
    if radius > MAX_FIT_EXTENT {
        return Err(FitError::OutOfBounds {
            quantity: "radius",
            value: radius,
            limit: MAX_FIT_EXTENT,
        });
    }

    Ok(Circle::new(center, radius))
}
