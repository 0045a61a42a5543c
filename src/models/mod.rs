//! Waveform models.
//!
//! Each model exposes one `evaluate(grid, &batch, f_ref)` entry point returning
//! `[batch, frequency]` polarizations. Models are pure functions of their inputs
//! and generic over the scalar type so derivatives flow through them.

pub mod phenom_d;
pub mod phenom_d_fits;
pub mod phenom_pv2;
pub mod pn;
pub mod qnm;
pub mod taylorf2;

use num_complex::Complex;

use crate::math::{Real, c};

/// Project a dominant-mode strain onto `(plus, cross)` for an observer at
/// inclination `ι`: `h+ = h (1 + cos²ι)/2`, `h× = -i cos ι h`.
pub fn project_polarizations<T: Real>(h: Complex<T>, cos_i: T) -> (Complex<T>, Complex<T>) {
    let plus = h * ((T::one() + cos_i * cos_i) * c(0.5));
    let cross = Complex::new(cos_i * h.im, -(cos_i * h.re));
    (plus, cross)
}
