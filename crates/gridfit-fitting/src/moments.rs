//! Centered second- and higher-order moments of a point cloud.

use gridfit_core::Point;

/// Moments of a point set about its centroid, normalized by the point count.
///
/// With `x`, `y` taken relative to the centroid and `z = x² + y²`:
/// `mxx = mean(x²)`, `mxz = mean(x·z)`, `mzz = mean(z²)` and so on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CenteredMoments {
    pub count: usize,
    pub centroid: Point,
    pub mxx: f64,
    pub myy: f64,
    pub mxy: f64,
    pub mxz: f64,
    pub myz: f64,
    pub mzz: f64,
}

impl CenteredMoments {
    /// Accumulates moments over `points`. An empty slice gives all zeros.
    pub fn from_points(points: &[Point]) -> Self {
        if points.is_empty() {
            return Self::default();
        }

        let n = points.len() as f64;
        let (sum_x, sum_y) = points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        let centroid = Point::new(sum_x / n, sum_y / n);

        let mut m = Self {
            count: points.len(),
            centroid,
            ..Self::default()
        };

        for p in points {
            let x = p.x - centroid.x;
            let y = p.y - centroid.y;
            let z = x * x + y * y;
            m.mxx += x * x;
            m.myy += y * y;
            m.mxy += x * y;
            m.mxz += x * z;
            m.myz += y * z;
            m.mzz += z * z;
        }

        m.mxx /= n;
        m.myy /= n;
        m.mxy /= n;
        m.mxz /= n;
        m.myz /= n;
        m.mzz /= n;
        m
    }

    /// Mean squared distance from the centroid, `mxx + myy`.
    pub fn mz(&self) -> f64 {
        self.mxx + self.myy
    }

    /// Determinant of the normalized covariance matrix.
    pub fn cov_xy(&self) -> f64 {
        self.mxx * self.myy - self.mxy * self.mxy
    }

    /// Variance of `z`.
    pub fn var_z(&self) -> f64 {
        self.mzz - self.mz() * self.mz()
    }

    /// Determinant of the unnormalized scatter matrix
    /// `[[Σx², Σxy], [Σxy, Σy²]]`.
    pub fn scatter_determinant(&self) -> f64 {
        let n = self.count as f64;
        (n * self.mxx) * (n * self.myy) - (n * self.mxy) * (n * self.mxy)
    }
}
