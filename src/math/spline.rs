//! Natural cubic spline through tabulated `f64` knots, evaluated at any [`Real`].
//!
//! Second derivatives at the knots come from the usual tridiagonal system,
//! solved once at construction. Evaluation is a cubic in the offset from the
//! left knot, so a `Dual` argument carries its derivative through.

use super::{Real, c};

#[derive(Debug, Clone)]
pub struct NaturalSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Second derivative at each knot; zero at both ends.
    m: Vec<f64>,
}

impl NaturalSpline {
    /// Knots must be strictly increasing and at least two.
    pub fn new(x: &[f64], y: &[f64]) -> Option<Self> {
        let n = x.len();
        if n < 2 || y.len() != n || x.windows(2).any(|w| !(w[1] > w[0])) {
            return None;
        }
        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
        let mut m = vec![0.0; n];
        if n > 2 {
            // Thomas algorithm on the interior rows.
            let rows = n - 2;
            let mut diag = vec![0.0; rows];
            let mut rhs = vec![0.0; rows];
            for i in 0..rows {
                diag[i] = 2.0 * (h[i] + h[i + 1]);
                rhs[i] = 6.0 * ((y[i + 2] - y[i + 1]) / h[i + 1] - (y[i + 1] - y[i]) / h[i]);
            }
            for i in 1..rows {
                let w = h[i] / diag[i - 1];
                diag[i] -= w * h[i];
                rhs[i] -= w * rhs[i - 1];
            }
            m[rows] = rhs[rows - 1] / diag[rows - 1];
            for i in (0..rows - 1).rev() {
                m[i + 1] = (rhs[i] - h[i + 1] * m[i + 2]) / diag[i];
            }
        }
        Some(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            m,
        })
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Outside the knots the end cubics are extended.
    pub fn eval<T: Real>(&self, at: T) -> T {
        let last = self.x.len() - 2;
        let i = self.x.partition_point(|&k| k <= at.value()).saturating_sub(1).min(last);
        let h = self.x[i + 1] - self.x[i];
        let (y0, y1) = (self.y[i], self.y[i + 1]);
        let (m0, m1) = (self.m[i], self.m[i + 1]);
        let slope = (y1 - y0) / h - h * (2.0 * m0 + m1) / 6.0;
        let u = at - c(self.x[i]);
        c::<T>(y0) + u * (c::<T>(slope) + u * (c::<T>(0.5 * m0) + u * c((m1 - m0) / (6.0 * h))))
    }
}
