//! IMRPhenomD: aligned-spin inspiral-merger-ringdown model.
//!
//! Amplitude and phase are each assembled from three regions in geometric
//! frequency `Mf`:
//!
//! | region       | amplitude              | phase                     |
//! |--------------|------------------------|---------------------------|
//! | inspiral     | `Mf < 0.014`           | `Mf < 0.018`              |
//! | intermediate | up to the peak `f_peak`| up to `0.5 f_RD`          |
//! | ringdown     | `Mf >= f_peak`         | `Mf >= 0.5 f_RD`          |
//!
//! Every region is evaluated at every frequency and the result picked with
//! [`Real::select`]. The intermediate amplitude is fixed by value and slope at
//! both ends; the phase regions are joined C¹ through connection constants.

use std::f64::consts::PI;

use ndarray::Zip;

use super::phenom_d_fits::{
    self as fits, ALPHA1, ALPHA2, ALPHA3, ALPHA4, ALPHA5, BETA1, BETA2, BETA3, GAMMA1, GAMMA2,
    GAMMA3, RHO1, RHO2, RHO3, SIGMA1, SIGMA2, SIGMA3, SIGMA4, V2,
};
use super::pn::PnPhasing;
use super::qnm;
use super::project_polarizations;
use crate::constants::{MPC_SI, MRSUN_SI, MTSUN_SI};
use crate::conversion::{clamp_eta, masses_from_chirp_and_ratio};
use crate::domain::{AlignedSpinBatch, Approximant, FrequencyGrid, Polarizations};
use crate::engine::evaluate_rows;
use crate::error::WaveformError;
use crate::math::{QuarticHermite, Real, c, cis};

/// End of the inspiral amplitude region.
pub const AMP_JOIN_INSPIRAL: f64 = 0.014;
/// End of the inspiral phase region.
pub const PHASE_JOIN_INSPIRAL: f64 = 0.018;
/// The model is zero at and above this geometric frequency.
pub const MF_CUT: f64 = 0.2;

/// Everything IMRPhenomD needs per source, in geometric units (`M = 1`).
#[derive(Debug, Clone)]
pub struct PhenomDCore<T> {
    pub eta: T,
    pub f_rd: T,
    pub f_dm: T,
    pub f_peak: T,
    pn: PnPhasing<T>,
    amp: AmpAnsatz<T>,
    amp_int: QuarticHermite<T>,
    sigma: [T; 4],
    beta: [T; 3],
    alpha: [T; 5],
    c1_int: T,
    c2_int: T,
    c1_mrd: T,
    c2_mrd: T,
}

impl<T: Real> PhenomDCore<T> {
    /// Aligned-spin source with the remnant spin from the standard fit.
    pub fn aligned(m1: T, m2: T, chi1: T, chi2: T) -> Self {
        let total = m1 + m2;
        let (m1n, m2n) = (m1 / total, m2 / total);
        let eta = clamp_eta(m1n * m2n);
        let (big, small, chi_big, chi_small) = order_by_mass(m1n, m2n, chi1, chi2);
        let final_spin = fits::final_spin_0815(eta, big, small, chi_big, chi_small);
        Self::new(m1, m2, chi1, chi2, final_spin)
    }

    /// Build with an externally supplied remnant spin (the precessing model
    /// adds the in-plane spin to it). Either mass ordering is accepted.
    pub fn new(m1: T, m2: T, chi1: T, chi2: T, final_spin: T) -> Self {
        let total = m1 + m2;
        let (m1, m2, chi1, chi2) = order_by_mass(m1 / total, m2 / total, chi1, chi2);
        let eta = clamp_eta(m1 * m2);
        let eta2 = eta * eta;
        let seta = (T::one() - c::<T>(4.0) * eta).sqrt_or_zero();

        let erad = fits::radiated_energy_0815(eta, m1, m2, chi1, chi2);
        let f_rd = qnm::fring(final_spin) / (T::one() - erad);
        let f_dm = qnm::fdamp(final_spin) / (T::one() - erad);

        let xi = fits::chi_pn(eta, seta, chi1, chi2) - T::one();
        let fit = |k| fits::evaluate_fit(k, eta, xi);

        let pi = c::<T>(PI);
        let (chi12, chi22) = (chi1 * chi1, chi2 * chi2);
        let eta3 = eta2 * eta;
        let amp_ins = [
            (c::<T>(-969.0) + c::<T>(1804.0) * eta) * c(PI.powf(2.0 / 3.0) / 672.0),
            (chi1 * (c::<T>(81.0) * (T::one() + seta) - c::<T>(44.0) * eta)
                + chi2 * (c::<T>(81.0) - c::<T>(81.0) * seta - c::<T>(44.0) * eta))
                * c(PI / 48.0),
            (c::<T>(-27312085.0) - c::<T>(10287648.0) * chi22
                - c::<T>(10287648.0) * chi12 * (T::one() + seta)
                + c::<T>(10287648.0) * chi22 * seta
                + c::<T>(24.0)
                    * (c::<T>(-1975055.0) + c::<T>(857304.0) * chi12
                        - c::<T>(994896.0) * chi1 * chi2
                        + c::<T>(857304.0) * chi22)
                    * eta
                + c::<T>(35371056.0) * eta2)
                * c(PI.powf(4.0 / 3.0) / 8.128512e6),
            (chi2
                * (c::<T>(-285197.0) * (seta - T::one())
                    + c::<T>(4.0) * (c::<T>(-91902.0) + c::<T>(1579.0) * seta) * eta
                    - c::<T>(35632.0) * eta2)
                + chi1
                    * (c::<T>(285197.0) * (T::one() + seta)
                        - c::<T>(4.0) * (c::<T>(91902.0) + c::<T>(1579.0) * seta) * eta
                        - c::<T>(35632.0) * eta2)
                + c::<T>(42840.0) * (c::<T>(4.0) * eta - T::one()) * pi)
                * c(PI.powf(5.0 / 3.0) / 32256.0),
            -(c::<T>(-336.0)
                * (c::<T>(-3248849057.0) + c::<T>(2943675504.0) * chi12
                    - c::<T>(3339284256.0) * chi1 * chi2
                    + c::<T>(2943675504.0) * chi22)
                * eta2
                - c::<T>(324322727232.0) * eta3
                - c::<T>(7.0)
                    * (c::<T>(-177520268561.0) + c::<T>(107414046432.0) * chi22
                        + c::<T>(107414046432.0) * chi12 * (T::one() + seta)
                        - c::<T>(107414046432.0) * chi22 * seta
                        + c::<T>(11087290368.0) * (chi1 + chi2 + chi1 * seta - chi2 * seta) * pi)
                + c::<T>(12.0)
                    * eta
                    * (c::<T>(-545384828789.0) - c::<T>(176491177632.0) * chi1 * chi2
                        + c::<T>(202603761360.0) * chi22
                        + c::<T>(77616.0) * chi12 * (c::<T>(2610335.0) + c::<T>(995766.0) * seta)
                        - c::<T>(77287373856.0) * chi22 * seta
                        + c::<T>(5841690624.0) * (chi1 + chi2) * pi
                        + c::<T>(21384760320.0 * PI * PI)))
                * c(PI * PI / 6.0085960704e10),
            fit(&RHO1),
            fit(&RHO2),
            fit(&RHO3),
        ];
        let amp = AmpAnsatz {
            ins: amp_ins,
            gamma: [fit(&GAMMA1), fit(&GAMMA2), fit(&GAMMA3)],
            f_rd,
            f_dm,
        };

        let f_peak = amp.peak_frequency();
        let f1 = c::<T>(AMP_JOIN_INSPIRAL);
        let f2 = (f1 + f_peak) * c(0.5);
        let amp_int = QuarticHermite::fit(
            f1,
            amp.inspiral(f1),
            amp.d_inspiral(f1),
            f2,
            fit(&V2),
            f_peak,
            amp.ringdown(f_peak),
            amp.d_ringdown(f_peak),
        );

        let mut core = Self {
            eta,
            f_rd,
            f_dm,
            f_peak,
            pn: PnPhasing::new(m1, m2, chi1, chi2, false),
            amp,
            amp_int,
            sigma: [fit(&SIGMA1), fit(&SIGMA2), fit(&SIGMA3), fit(&SIGMA4)],
            beta: [fit(&BETA1), fit(&BETA2), fit(&BETA3)],
            alpha: [fit(&ALPHA1), fit(&ALPHA2), fit(&ALPHA3), fit(&ALPHA4), fit(&ALPHA5)],
            c1_int: T::zero(),
            c2_int: T::zero(),
            c1_mrd: T::zero(),
            c2_mrd: T::zero(),
        };

        core.connect_phase();
        core
    }

    /// Amplitude at `Mf`, including the leading `Mf^{-7/6}` scaling but not the
    /// distance/mass prefactor.
    pub fn amplitude(&self, mf: T) -> T {
        let scale = (c::<T>(2.0) * self.eta / c(3.0)).sqrt()
            * c(PI.powf(-1.0 / 6.0))
            * mf.powf(c(-7.0 / 6.0));
        let shape = T::select(
            mf.value() < AMP_JOIN_INSPIRAL,
            self.amp.inspiral(mf),
            T::select(
                mf.value() >= self.f_peak.value(),
                self.amp.ringdown(mf),
                self.amp_int.eval(mf),
            ),
        );
        T::select(mf.value() < MF_CUT, scale * shape, T::zero())
    }

    fn phase_inspiral(&self, mf: T) -> T {
        let [s1, s2, s3, s4] = self.sigma;
        let v = (c::<T>(PI) * mf).cbrt();
        let third = mf.cbrt();
        self.pn.phase(v) - c(PI / 4.0)
            + (s1 * mf
                + c::<T>(0.75) * s2 * mf * third
                + c::<T>(0.6) * s3 * mf * third * third
                + c::<T>(0.5) * s4 * mf * mf)
                / self.eta
    }

    fn dphase_inspiral(&self, mf: T) -> T {
        let [s1, s2, s3, s4] = self.sigma;
        let v = (c::<T>(PI) * mf).cbrt();
        let third = mf.cbrt();
        self.pn.phase_dv(v) * c(PI / 3.0) / (v * v)
            + (s1 + s2 * third + s3 * third * third + s4 * mf) / self.eta
    }

    fn phase_intermediate(&self, mf: T) -> T {
        let [b1, b2, b3] = self.beta;
        (b1 * mf - b3 / (c::<T>(3.0) * mf * mf * mf) + b2 * mf.ln()) / self.eta
    }

    fn dphase_intermediate(&self, mf: T) -> T {
        let [b1, b2, b3] = self.beta;
        let mf2 = mf * mf;
        (b1 + b3 / (mf2 * mf2) + b2 / mf) / self.eta
    }

    fn phase_ringdown(&self, mf: T) -> T {
        let [a1, a2, a3, a4, a5] = self.alpha;
        (-(a2 / mf) + c::<T>(4.0 / 3.0) * a3 * mf.powf(c(0.75))
            + a1 * mf
            + a4 * ((mf - a5 * self.f_rd) / self.f_dm).atan())
            / self.eta
    }

    fn dphase_ringdown(&self, mf: T) -> T {
        let [a1, a2, a3, a4, a5] = self.alpha;
        let x = (mf - a5 * self.f_rd) / self.f_dm;
        (a1 + a2 / (mf * mf) + a3 / mf.powf(c(0.25)) + a4 / (self.f_dm * (T::one() + x * x)))
            / self.eta
    }

    fn connect_phase(&mut self) {
        let f_ins = c::<T>(PHASE_JOIN_INSPIRAL);
        self.c2_int = self.dphase_inspiral(f_ins) - self.dphase_intermediate(f_ins);
        self.c1_int =
            self.phase_inspiral(f_ins) - self.phase_intermediate(f_ins) - self.c2_int * f_ins;

        let f_mrd = self.ringdown_join();
        let phase_int = self.phase_intermediate(f_mrd) + self.c1_int + self.c2_int * f_mrd;
        let dphase_int = self.dphase_intermediate(f_mrd) + self.c2_int;
        self.c2_mrd = dphase_int - self.dphase_ringdown(f_mrd);
        self.c1_mrd = phase_int - self.phase_ringdown(f_mrd) - self.c2_mrd * f_mrd;
    }

    /// Start of the ringdown phase region, `0.5 f_RD`.
    pub fn ringdown_join(&self) -> T {
        self.f_rd * c(0.5)
    }

    /// Phase `Φ(Mf)`; the strain is `A e^{-iΦ}`.
    pub fn phase(&self, mf: T) -> T {
        let ins = self.phase_inspiral(mf);
        let int = self.phase_intermediate(mf) + self.c1_int + self.c2_int * mf;
        let mrd = self.phase_ringdown(mf) + self.c1_mrd + self.c2_mrd * mf;
        T::select(
            mf.value() < PHASE_JOIN_INSPIRAL,
            ins,
            T::select(mf.value() >= self.ringdown_join().value(), mrd, int),
        )
    }

    /// `dΦ/dMf`.
    pub fn phase_derivative(&self, mf: T) -> T {
        let ins = self.dphase_inspiral(mf);
        let int = self.dphase_intermediate(mf) + self.c2_int;
        let mrd = self.dphase_ringdown(mf) + self.c2_mrd;
        T::select(
            mf.value() < PHASE_JOIN_INSPIRAL,
            ins,
            T::select(mf.value() >= self.ringdown_join().value(), mrd, int),
        )
    }

    /// Linear-in-frequency phase term that puts the time of peak amplitude
    /// at zero: the ringdown phase slope at `f_peak`.
    pub fn peak_time_shift(&self) -> T {
        self.dphase_ringdown(self.f_peak)
    }
}

/// Inspiral and ringdown amplitude ansätze; the intermediate region is
/// interpolated between them.
#[derive(Debug, Clone)]
struct AmpAnsatz<T> {
    // Mf^{2/3}, Mf, Mf^{4/3}, Mf^{5/3}, Mf², Mf^{7/3}, Mf^{8/3}, Mf³
    ins: [T; 8],
    gamma: [T; 3],
    f_rd: T,
    f_dm: T,
}

impl<T: Real> AmpAnsatz<T> {
    fn peak_frequency(&self) -> T {
        let [_, g2, g3] = self.gamma;
        let root = (T::one() - g2 * g2).sqrt_or_zero();
        let below = (self.f_rd + self.f_dm * (root - T::one()) * g3 / g2).abs();
        let above = (self.f_rd - self.f_dm * g3 / g2).abs();
        T::select(g2.value() <= 1.0, below, above)
    }

    fn inspiral(&self, mf: T) -> T {
        let [c23, c1, c43, c53, c2, r1, r2, r3] = self.ins;
        let third = mf.cbrt();
        let two_thirds = third * third;
        let mf2 = mf * mf;
        T::one()
            + c23 * two_thirds
            + c1 * mf
            + c43 * mf * third
            + c53 * mf * two_thirds
            + c2 * mf2
            + r1 * mf2 * third
            + r2 * mf2 * two_thirds
            + r3 * mf2 * mf
    }

    fn d_inspiral(&self, mf: T) -> T {
        let [c23, c1, c43, c53, c2, r1, r2, r3] = self.ins;
        let third = mf.cbrt();
        let two_thirds = third * third;
        c::<T>(2.0 / 3.0) * c23 / third
            + c1
            + c::<T>(4.0 / 3.0) * c43 * third
            + c::<T>(5.0 / 3.0) * c53 * two_thirds
            + c::<T>(2.0) * c2 * mf
            + c::<T>(7.0 / 3.0) * r1 * mf * third
            + c::<T>(8.0 / 3.0) * r2 * mf * two_thirds
            + c::<T>(3.0) * r3 * mf * mf
    }

    fn ringdown(&self, mf: T) -> T {
        let [g1, g2, g3] = self.gamma;
        let width = self.f_dm * g3;
        let x = mf - self.f_rd;
        (-(x * g2) / width).exp() * width * g1 / (x * x + width * width)
    }

    fn d_ringdown(&self, mf: T) -> T {
        let [g1, g2, g3] = self.gamma;
        let width = self.f_dm * g3;
        let x = mf - self.f_rd;
        let decay = (-(x * g2) / width).exp();
        let lorentz = x * x + width * width;
        decay * (c::<T>(-2.0) * width * x * g1 / (lorentz * lorentz) - g2 * g1 / lorentz)
    }
}

/// `(heavier, lighter, χ_heavier, χ_lighter)` without branching the graph.
fn order_by_mass<T: Real>(m1: T, m2: T, chi1: T, chi2: T) -> (T, T, T, T) {
    let keep = m1.value() >= m2.value();
    (
        T::select(keep, m1, m2),
        T::select(keep, m2, m1),
        T::select(keep, chi1, chi2),
        T::select(keep, chi2, chi1),
    )
}

/// Evaluate IMRPhenomD on `grid` for every source in `batch`.
pub fn evaluate<T: Real>(
    grid: &FrequencyGrid<T>,
    batch: &AlignedSpinBatch<T>,
    f_ref: T,
) -> Result<Polarizations<T>, WaveformError> {
    let n = batch.batch_size()?;
    evaluate_rows(Approximant::ImrPhenomD, grid, n, |i, freqs, plus, cross| {
        let p = batch.get(i);
        let (m1, m2) = masses_from_chirp_and_ratio(p.chirp_mass, p.mass_ratio);
        let core = PhenomDCore::aligned(m1, m2, p.chi1, p.chi2);

        let total = m1 + m2;
        let m_sec = total * c(MTSUN_SI);
        let distance = p.distance * c(MPC_SI);
        let amp0 = c::<T>(2.0 * (5.0 / (64.0 * PI)).sqrt()) * total * c(MRSUN_SI) * m_sec / distance;

        let mf_ref = m_sec * f_ref;
        let t0 = core.peak_time_shift();
        let phi_ref = c::<T>(2.0) * p.phase + core.phase(mf_ref);
        let cos_i = p.inclination.cos();

        Zip::from(plus).and(cross).and(freqs).for_each(|hp, hc, &f| {
            let mf = m_sec * f;
            let phi = core.phase(mf) - t0 * (mf - mf_ref) - phi_ref;
            let h = cis(-phi) * (amp0 * core.amplitude(mf));
            (*hp, *hc) = project_polarizations(h, cos_i);
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AlignedSpinParams;
    use crate::math::Dual;

    fn core() -> PhenomDCore<f64> {
        let (m1, m2) = masses_from_chirp_and_ratio(30.0, 0.8);
        PhenomDCore::aligned(m1, m2, 0.1, -0.1)
    }

    #[test]
    fn region_boundaries_are_ordered() {
        let d = core();
        assert!(d.f_rd > 0.05 && d.f_rd < 0.15, "f_rd={}", d.f_rd);
        assert!(d.f_dm > 0.0 && d.f_dm < d.f_rd);
        assert!(d.f_peak > AMP_JOIN_INSPIRAL && d.f_peak < MF_CUT);
        assert!(d.ringdown_join() > PHASE_JOIN_INSPIRAL);
    }

    #[test]
    fn amplitude_is_continuous_at_both_joins() {
        let d = core();
        let eps = 1e-9;
        for f in [AMP_JOIN_INSPIRAL, d.f_peak] {
            let lo = d.amplitude(f - eps);
            let hi = d.amplitude(f + eps);
            assert!((lo - hi).abs() < 1e-6 * lo.abs(), "f={f}: {lo} vs {hi}");
        }
    }

    #[test]
    fn amplitude_slope_is_continuous_at_both_joins() {
        let d = core();
        let h = 1e-8;
        for f in [AMP_JOIN_INSPIRAL, d.f_peak] {
            let left = (d.amplitude(f - h) - d.amplitude(f - 2.0 * h)) / h;
            let right = (d.amplitude(f + 2.0 * h) - d.amplitude(f + h)) / h;
            assert!((left - right).abs() < 1e-4 * left.abs(), "f={f}: {left} vs {right}");
        }
    }

    #[test]
    fn phase_and_slope_are_continuous_at_both_joins() {
        let d = core();
        let eps = 1e-9;
        for f in [PHASE_JOIN_INSPIRAL, d.ringdown_join()] {
            let (lo, hi) = (d.phase(f - eps), d.phase(f + eps));
            assert!((lo - hi).abs() < 1e-4, "phase at {f}: {lo} vs {hi}");
            let (dlo, dhi) = (d.phase_derivative(f - eps), d.phase_derivative(f + eps));
            assert!((dlo - dhi).abs() < 1e-6 * dlo.abs(), "slope at {f}: {dlo} vs {dhi}");
        }
    }

    #[test]
    fn analytic_phase_derivative_matches_finite_difference() {
        let d = core();
        for mf in [0.005, 0.03, 0.09] {
            let h = 1e-7;
            let fd = (d.phase(mf + h) - d.phase(mf - h)) / (2.0 * h);
            let an = d.phase_derivative(mf);
            assert!((fd - an).abs() < 1e-5 * an.abs(), "mf={mf}: fd={fd}, an={an}");
        }
    }

    #[test]
    fn zero_above_cutoff() {
        let d = core();
        assert_eq!(d.amplitude(MF_CUT), 0.0);
        assert!(d.amplitude(MF_CUT * 0.99) > 0.0);
    }

    #[test]
    fn mass_ordering_does_not_matter() {
        let a = PhenomDCore::new(36.0, 29.0, 0.3, -0.2, 0.7);
        let b = PhenomDCore::new(29.0, 36.0, -0.2, 0.3, 0.7);
        for mf in [0.004, 0.02, 0.06, 0.1] {
            assert!((a.amplitude(mf) - b.amplitude(mf)).abs() < 1e-12 * a.amplitude(mf));
            assert!((a.phase(mf) - b.phase(mf)).abs() < 1e-9 * a.phase(mf).abs());
        }
    }

    #[test]
    fn strain_is_differentiable_in_chirp_mass() {
        let grid = FrequencyGrid::Shared(ndarray::array![20.0, 60.0, 150.0]);
        let batch = |mc: f64| {
            AlignedSpinBatch::single(AlignedSpinParams {
                chirp_mass: mc,
                mass_ratio: 0.8,
                chi1: 0.1,
                chi2: -0.1,
                distance: 500.0,
                phase: 0.0,
                inclination: 0.5,
            })
        };
        let mc = 30.0;
        let h = 1e-6;
        let up = evaluate(&grid, &batch(mc + h), 20.0).unwrap();
        let down = evaluate(&grid, &batch(mc - h), 20.0).unwrap();

        let dual_grid = FrequencyGrid::Shared(grid_to_dual(&[20.0, 60.0, 150.0]));
        let dual_batch = AlignedSpinBatch::single(AlignedSpinParams {
            chirp_mass: Dual::new(mc, 1.0),
            mass_ratio: Dual::from_real(0.8),
            chi1: Dual::from_real(0.1),
            chi2: Dual::from_real(-0.1),
            distance: Dual::from_real(500.0),
            phase: Dual::from_real(0.0),
            inclination: Dual::from_real(0.5),
        });
        let dual = evaluate(&dual_grid, &dual_batch, Dual::from_real(20.0)).unwrap();

        for k in 0..3 {
            let fd = (up.plus[[0, k]].re - down.plus[[0, k]].re) / (2.0 * h);
            let ad = dual.plus[[0, k]].re.dual();
            let scale = fd.abs().max(up.plus[[0, k]].re.abs());
            assert!((fd - ad).abs() < 1e-4 * scale, "bin {k}: fd={fd}, ad={ad}");
        }
    }

    fn grid_to_dual(f: &[f64]) -> ndarray::Array1<Dual> {
        f.iter().map(|&x| Dual::from_real(x)).collect()
    }
}
