//! Numeric building blocks: the generic scalar plus the collocation polynomial
//! and spline used by the phenomenological models.

pub mod hermite;
pub mod real;
pub mod spline;

pub use hermite::QuarticHermite;
pub use real::{Dual, Real, c, cis};
pub use spline::NaturalSpline;
