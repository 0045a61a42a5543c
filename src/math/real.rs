//! Scalar abstraction shared by every waveform model.
//!
//! All model math is written once against `num_traits::Float` (re-exported by
//! `hyperdual`), extended by [`Real`]. Two scalars implement it:
//!
//! - `f64` for plain evaluation
//! - [`Dual`] (`hyperdual::Dual<f64>`) for forward-mode derivatives through the
//!   exact same code path
//!
//! Piecewise regions are combined with [`Real::select`], an elementwise choice
//! between two already-evaluated values. The derivative of the result is the
//! derivative of the chosen branch, so the models stay differentiable without
//! data-dependent control flow in the evaluation graph.

use std::fmt::Debug;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use hyperdual::Float;
use num_complex::Complex;

/// Value plus one directional derivative.
pub type Dual = hyperdual::Dual<f64>;

pub trait Real:
    Float + AddAssign + SubAssign + MulAssign + DivAssign + Debug + Send + Sync + 'static
{
    /// Lift a constant into the scalar type (zero derivative).
    fn lit(value: f64) -> Self;

    /// The primal value, used for comparisons in masks.
    fn value(self) -> f64;

    /// Elementwise `cond ? a : b`.
    #[inline]
    fn select(cond: bool, a: Self, b: Self) -> Self {
        if cond { a } else { b }
    }

    /// Smaller of two values, by primal value.
    #[inline]
    fn min_of(self, other: Self) -> Self {
        Self::select(self.value() <= other.value(), self, other)
    }

    /// Larger of two values, by primal value.
    #[inline]
    fn max_of(self, other: Self) -> Self {
        Self::select(self.value() >= other.value(), self, other)
    }

    /// `+1` for non-negative primal values, `-1` otherwise.
    #[inline]
    fn sign(self) -> Self {
        Self::select(self.value() >= 0.0, Self::one(), -Self::one())
    }

    /// `sqrt` with a zero derivative where the argument vanishes (spin
    /// magnitudes of exactly aligned or equal-mass systems).
    #[inline]
    fn sqrt_or_zero(self) -> Self {
        Self::select(self.value() > 0.0, self.sqrt(), Self::zero())
    }
}

/// Shorthand for [`Real::lit`] so constants read naturally in formulas.
#[inline]
pub fn c<T: Real>(value: f64) -> T {
    T::lit(value)
}

/// `e^{ix}`.
#[inline]
pub fn cis<T: Real>(x: T) -> Complex<T> {
    Complex::cis(x)
}

impl Real for f64 {
    #[inline]
    fn lit(value: f64) -> Self {
        value
    }

    #[inline]
    fn value(self) -> f64 {
        self
    }
}

impl Real for Dual {
    #[inline]
    fn lit(value: f64) -> Self {
        Dual::from_real(value)
    }

    #[inline]
    fn value(self) -> f64 {
        self.real()
    }
}
