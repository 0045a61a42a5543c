//! Mass parameterizations.
//!
//! Mass ratio is `q = m2 / m1`. Sources usually carry `q <= 1`, but any `q > 0`
//! is accepted; the models order the bodies and their spins themselves.

use crate::math::{Real, c};

/// Component masses `(m1, m2)` from chirp mass and mass ratio `q = m2/m1`.
///
/// Closed form; `q <= 0` yields non-finite output. Callers validate first.
pub fn masses_from_chirp_and_ratio<T: Real>(chirp_mass: T, mass_ratio: T) -> (T, T) {
    let one_plus_q = T::one() + mass_ratio;
    let total = chirp_mass * one_plus_q.powf(c(1.2)) / mass_ratio.powf(c(0.6));
    let m1 = total / one_plus_q;
    (m1, mass_ratio * m1)
}

pub fn chirp_mass<T: Real>(m1: T, m2: T) -> T {
    (m1 * m2).powf(c(0.6)) / (m1 + m2).powf(c(0.2))
}

pub fn mass_ratio<T: Real>(m1: T, m2: T) -> T {
    m2 / m1
}

pub fn symmetric_mass_ratio<T: Real>(m1: T, m2: T) -> T {
    let total = m1 + m2;
    m1 * m2 / (total * total)
}

/// Total mass from chirp mass and symmetric mass ratio, `Mc / η^(3/5)`.
pub fn total_mass<T: Real>(chirp_mass: T, eta: T) -> T {
    chirp_mass / eta.powf(c(0.6))
}

/// Clamp η to its physical maximum of 1/4; rounding can push equal-mass
/// inputs a hair above it, which would make `sqrt(1 - 4η)` NaN.
pub fn clamp_eta<T: Real>(eta: T) -> T {
    eta.min_of(c(0.25))
}
