//! TaylorF2: stationary-phase post-Newtonian inspiral.
//!
//! Phase to 3.5PN with aligned-spin corrections (see [`PnPhasing`]), Newtonian
//! amplitude. No frequency cutoff is applied; beyond the inspiral the model is
//! extrapolated.

use std::f64::consts::PI;

use ndarray::Zip;
use num_complex::Complex;

use super::pn::PnPhasing;
use super::project_polarizations;
use crate::constants::{MPC_SI, MRSUN_SI, MTSUN_SI};
use crate::conversion::{masses_from_chirp_and_ratio, symmetric_mass_ratio};
use crate::domain::{AlignedSpinBatch, AlignedSpinParams, Approximant, FrequencyGrid, Polarizations};
use crate::engine::evaluate_rows;
use crate::error::WaveformError;
use crate::math::{Real, c, cis};

/// Per-source quantities, fixed before looping over frequencies.
struct Source<T> {
    pn: PnPhasing<T>,
    /// `π M` in seconds.
    pi_m: T,
    amp0: T,
    /// Subtracted from every phase value.
    phase_offset: T,
    cos_i: T,
}

impl<T: Real> Source<T> {
    fn new(p: &AlignedSpinParams<T>, f_ref: T) -> Self {
        let (m1, m2) = masses_from_chirp_and_ratio(p.chirp_mass, p.mass_ratio);
        let total = m1 + m2;
        let eta = symmetric_mass_ratio(m1, m2);
        let pn = PnPhasing::new(m1, m2, p.chi1, p.chi2, true);
        let pi_m = total * c(PI * MTSUN_SI);

        let distance = p.distance * c(MPC_SI);
        let amp0 = c::<T>(-4.0 * MRSUN_SI * MTSUN_SI * (PI / 12.0).sqrt()) * m1 * m2 / distance
            * (c::<T>(5.0 / 32.0) / eta).sqrt();

        let v_ref = (pi_m * f_ref).cbrt();
        let phase_offset = c::<T>(2.0) * p.phase + pn.phase(v_ref);

        Self {
            pn,
            pi_m,
            amp0,
            phase_offset,
            cos_i: p.inclination.cos(),
        }
    }

    fn strain(&self, f: T) -> Complex<T> {
        let v = (self.pi_m * f).cbrt();
        let amp = self.amp0 * v.powf(c(-3.5));
        let psi = self.pn.phase(v) - self.phase_offset - c(PI / 4.0);
        cis(-psi) * amp
    }
}

/// Evaluate TaylorF2 on `grid` for every source in `batch`.
pub fn evaluate<T: Real>(
    grid: &FrequencyGrid<T>,
    batch: &AlignedSpinBatch<T>,
    f_ref: T,
) -> Result<Polarizations<T>, WaveformError> {
    let n = batch.batch_size()?;
    evaluate_rows(Approximant::TaylorF2, grid, n, |i, freqs, plus, cross| {
        let source = Source::new(&batch.get(i), f_ref);
        Zip::from(plus).and(cross).and(freqs).for_each(|hp, hc, &f| {
            (*hp, *hc) = project_polarizations(source.strain(f), source.cos_i);
        });
    })
}
