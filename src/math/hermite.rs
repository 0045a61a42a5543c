//! Quartic collocation through Newton divided differences.
//!
//! Used for the IMRPhenomD intermediate amplitude: a degree-4 polynomial that
//! matches value and slope at both ends of an interval and a value at one
//! interior node. Repeated nodes carry derivative data (Hermite form).

use super::Real;

/// Degree-4 polynomial in Newton form on nodes `[f1, f1, f2, f3, f3]`.
#[derive(Debug, Clone, Copy)]
pub struct QuarticHermite<T> {
    nodes: [T; 4],
    coeffs: [T; 5],
}

impl<T: Real> QuarticHermite<T> {
    /// Fit through `(f1, v1, d1)`, `(f2, v2)` and `(f3, v3, d3)`.
    #[allow(clippy::too_many_arguments)]
    pub fn fit(f1: T, v1: T, d1: T, f2: T, v2: T, f3: T, v3: T, d3: T) -> Self {
        // First divided differences.
        let d12 = (v2 - v1) / (f2 - f1);
        let d23 = (v3 - v2) / (f3 - f2);

        // Second order.
        let d112 = (d12 - d1) / (f2 - f1);
        let d123 = (d23 - d12) / (f3 - f1);
        let d233 = (d3 - d23) / (f3 - f2);

        // Third order.
        let d1123 = (d123 - d112) / (f3 - f1);
        let d1233 = (d233 - d123) / (f3 - f1);

        // Fourth order.
        let d11233 = (d1233 - d1123) / (f3 - f1);

        Self {
            nodes: [f1, f1, f2, f3],
            coeffs: [v1, d1, d112, d1123, d11233],
        }
    }

    pub fn eval(&self, f: T) -> T {
        let [a0, a1, a2, a3, a4] = self.coeffs;
        let [x0, x1, x2, x3] = self.nodes;
        // Horner on the nested Newton form.
        a0 + (f - x0) * (a1 + (f - x1) * (a2 + (f - x2) * (a3 + (f - x3) * a4)))
    }
}
