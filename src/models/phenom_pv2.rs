//! IMRPhenomPv2: precessing waveforms by twisting up IMRPhenomD.
//!
//! 1. Reduce the two spins to the aligned components plus one effective
//!    in-plane spin `χ_p` on the heavier body, and locate the observer in the
//!    frame of the total angular momentum J at `f_ref`.
//! 2. Evaluate the aligned-spin IMRPhenomD core with a remnant spin that
//!    includes the in-plane contribution.
//! 3. Rotate the l = 2 modes by the NNLO precession angles `α(f)`, `β(f)`,
//!    `ε(f)` and project onto the observer at `θ_JN`.
//! 4. Rotate the polarization basis by `2ζ`, remove the group delay at the
//!    ringdown frequency and apply the coalescence-time ramp.

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::Vector3;
use ndarray::Zip;
use num_complex::Complex;

use super::phenom_d::PhenomDCore;
use super::phenom_d_fits::final_spin_0815;
use crate::constants::{MPC_SI, MRSUN_SI, MTSUN_SI};
use crate::conversion::rotation::{norm, rot_y, rot_z};
use crate::conversion::{clamp_eta, masses_from_chirp_and_ratio};
use crate::domain::{Approximant, FrequencyGrid, Polarizations, PrecessingSpinBatch, PrecessingSpinParams};
use crate::engine::evaluate_rows;
use crate::error::WaveformError;
use crate::math::{Real, c, cis};

/// Below this, in-plane components are treated as exactly zero when choosing
/// azimuths.
const ATAN_TOL: f64 = 1e-15;
/// Below this, |J| is treated as zero.
const J_TOL: f64 = 1e-10;

/// Orientation of the source relative to J and the observer.
#[derive(Debug, Clone, Copy)]
pub struct FrameParams<T> {
    pub chi_p: T,
    pub theta_jn: T,
    /// Initial precession phase.
    pub alpha0: T,
    /// Orbital phase offset of the aligned-spin waveform.
    pub phi_aligned: T,
    /// Polarization angle between the J-frame and source-frame bases.
    pub zeta: T,
}

/// 2PN orbital angular momentum for unit total mass.
fn orbital_angular_momentum<T: Real>(v: T, eta: T) -> T {
    let x = v * v;
    eta / v
        * (T::one()
            + (c::<T>(1.5) + eta / c(6.0)) * x
            + (c::<T>(3.375) - c::<T>(19.0 / 8.0) * eta - eta * eta / c(24.0)) * x * x)
}

fn both_small<T: Real>(x: T, y: T) -> bool {
    x.value().abs() < ATAN_TOL && y.value().abs() < ATAN_TOL
}

/// Frame parameters from L-frame Cartesian spins.
///
/// Masses are in solar masses with `m1 >= m2`; `inclination` and `phase` are
/// the observer polar angle and reference phase in the L frame.
pub fn frame_params<T: Real>(
    m1: T,
    m2: T,
    p: &PrecessingSpinParams<T>,
    f_ref: T,
) -> FrameParams<T> {
    let zero = T::zero();
    let total = m1 + m2;
    let (m1_2, m2_2) = (m1 * m1, m2 * m2);
    let eta = clamp_eta(m1 * m2 / (total * total));

    let s1_perp = m1_2 * (p.chi1x * p.chi1x + p.chi1y * p.chi1y).sqrt_or_zero();
    let s2_perp = m2_2 * (p.chi2x * p.chi2x + p.chi2y * p.chi2y).sqrt_or_zero();
    let a1 = c::<T>(2.0) + c::<T>(1.5) * m2 / m1;
    let a2 = c::<T>(2.0) + c::<T>(1.5) * m1 / m2;
    let num = (a1 * s1_perp).max_of(a2 * s2_perp);
    let den = T::select(m2.value() > m1.value(), a2 * m2_2, a1 * m1_2);
    let chi_p = num / den;

    let v_ref = (c::<T>(PI * MTSUN_SI) * total * f_ref).cbrt();
    let l0 = total * total * orbital_angular_momentum(v_ref, eta);
    let j = Vector3::new(
        m1_2 * p.chi1x + m2_2 * p.chi2x,
        m1_2 * p.chi1y + m2_2 * p.chi2y,
        l0 + m1_2 * p.chi1z + m2_2 * p.chi2z,
    );
    let j_norm = norm(&j);
    let theta_j = T::select(j_norm.value() < J_TOL, zero, (j[2] / j_norm).acos());
    let phi_j = T::select(
        both_small(j[0], j[1]),
        c::<T>(FRAC_PI_2) - p.phase,
        j[1].atan2(j[0]),
    );

    let (sin_i, cos_i) = (p.inclination.sin(), p.inclination.cos());
    let n_src = Vector3::new(
        sin_i * (c::<T>(FRAC_PI_2) - p.phase).cos(),
        sin_i * (c::<T>(FRAC_PI_2) - p.phase).sin(),
        cos_i,
    );

    // J onto z, then the line of sight into the x–z plane.
    let to_j = rot_y(-theta_j) * rot_z(-phi_j);
    let n_tmp = to_j * n_src;
    let kappa = T::select(
        both_small(n_tmp[0], n_tmp[1]),
        zero,
        -n_tmp[1].atan2(n_tmp[0]),
    );
    let frame = rot_z(kappa) * to_j;

    let l_j = frame * Vector3::new(zero, zero, T::one());
    let alpha0 = T::select(both_small(l_j[0], l_j[1]), c(PI), l_j[1].atan2(l_j[0]));

    let n_j = frame * n_src;
    let theta_jn = n_j[2].max_of(-T::one()).min_of(T::one()).acos();

    let x_src = Vector3::new(
        -cos_i * p.phase.sin(),
        -cos_i * p.phase.cos(),
        sin_i,
    );
    let x_j = frame * x_src;
    let p_j = Vector3::new(zero, -T::one(), zero);
    let q_j = Vector3::new(n_j[2], zero, -n_j[0]);
    let zeta = x_j.dot(&q_j).atan2(x_j.dot(&p_j));

    FrameParams {
        chi_p,
        theta_jn,
        alpha0,
        phi_aligned: -phi_j,
        zeta,
    }
}

/// NNLO post-Newtonian precession angles in `ω = π Mf`.
///
/// Both angles share the form
/// `a1/ω + a2/ω^{2/3} + a3/ω^{1/3} + a4 ln ω + a5 ω^{1/3}`.
#[derive(Debug, Clone, Copy)]
struct NnloAngles<T> {
    alpha: [T; 5],
    epsilon: [T; 5],
}

impl<T: Real> NnloAngles<T> {
    /// `q >= 1` is heavier over lighter; `chil` is the aligned spin of the
    /// heavier body in its own mass units.
    fn new(q: T, chil: T, chip: T) -> Self {
        let n = |x: f64| c::<T>(x);
        let pi = n(PI);
        let b = q / (T::one() + q);
        let dm = (T::one() - q) / (T::one() + q);
        let eta = b * (T::one() - b);
        let (eta2, eta3) = (eta * eta, eta * eta * eta);
        let eta4 = eta2 * eta2;
        let (b2, b3, b4) = (b * b, b * b * b, b * b * b * b);
        let (b5, b6, b7, b8) = (b4 * b, b4 * b2, b4 * b3, b4 * b4);
        let (dm2, dm3) = (dm * dm, dm * dm * dm);
        let chil2 = chil * chil;
        let chip2 = chip * chip;
        let chip4 = chip2 * chip2;

        let e1 = n(-0.18229166666666666) - n(5.0) * dm / (n(64.0) * b);
        let e2 = -(n(15.0) * dm * b + n(35.0) * b2) * chil / (n(128.0) * eta);
        let e3 = n(-1.7952473958333333) - n(4555.0) * dm / (n(7168.0) * b)
            - n(515.0) * eta / n(384.0)
            - n(15.0) * dm2 * eta / (n(256.0) * b2)
            - n(175.0) * dm * eta / (n(256.0) * b);
        let e4 = n(-35.0 * PI / 48.0) - n(5.0) * dm * pi / (n(16.0) * b)
            + n(5.0) * dm2 * chil / n(16.0)
            + n(5.0) * dm * b * chil / n(3.0)
            + n(2545.0) * b2 * chil / n(1152.0)
            + n(2035.0) * dm * b * chil / (n(21504.0) * eta)
            + n(2995.0) * b2 * chil / (n(9216.0) * eta);
        let e5 = n(4.318908476114694) + n(27895885.0) * dm / (n(2.1676032e7) * b)
            + n(39695.0) * eta / n(86016.0)
            + n(1615.0) * dm2 * eta / (n(28672.0) * b2)
            - n(265.0) * dm * eta / (n(14336.0) * b)
            + n(955.0) * eta2 / n(576.0)
            + n(15.0) * dm3 * eta2 / (n(1024.0) * b3)
            + n(35.0) * dm2 * eta2 / (n(256.0) * b2)
            + n(2725.0) * dm * eta2 / (n(3072.0) * b)
            - n(15.0) * dm * b * pi * chil / (n(16.0) * eta)
            - n(35.0) * b2 * pi * chil / (n(16.0) * eta)
            + n(375.0) * dm2 * b2 * chil2 / (n(256.0) * eta)
            + n(1815.0) * dm * b3 * chil2 / (n(256.0) * eta)
            + n(1645.0) * b4 * chil2 / (n(192.0) * eta);

        // α carries the in-plane spin on top of ε.
        let a3 = e3 - chip2 * (n(15.0) * dm * b3 + n(35.0) * b4) / (n(128.0) * eta2);
        let a4 = e4
            - chip2 * chil * (n(5.0 / 128.0) * dm * b5 + n(35.0 / 384.0) * b6) / eta3;
        let a5 = e5 - chip4 * (n(15.0) * dm * b7 + n(35.0) * b8) / (n(512.0) * eta4)
            + chip2
                * (-(n(485.0) * dm * b3) / (n(14336.0) * eta2)
                    + n(475.0) * b4 / (n(6144.0) * eta2)
                    + n(15.0) * dm2 * b2 / (n(256.0) * eta)
                    + n(145.0) * dm * b3 / (n(512.0) * eta)
                    + n(575.0) * b4 / (n(1536.0) * eta)
                    + chil2 * (n(15.0) * dm * b7 + n(35.0) * b8) / (n(128.0) * eta4));

        Self {
            alpha: [e1, e2, a3, a4, a5],
            epsilon: [e1, e2, e3, e4, e5],
        }
    }

    fn series(k: &[T; 5], omega: T) -> T {
        let third = omega.cbrt();
        k[0] / omega + k[1] / (third * third) + k[2] / third + k[3] * omega.ln() + k[4] * third
    }

    fn alpha(&self, omega: T) -> T {
        Self::series(&self.alpha, omega)
    }

    fn epsilon(&self, omega: T) -> T {
        Self::series(&self.epsilon, omega)
    }
}

/// `(cos β/2, sin β/2)` of the opening angle between L and J.
fn half_beta<T: Real>(v: T, eta: T, s_perp: T, s_l: T) -> (T, T) {
    let s = s_perp / (orbital_angular_momentum(v, eta) + s_l);
    let cos_beta = T::one() / (T::one() + s * s).sqrt();
    (
        ((T::one() + cos_beta) * c(0.5)).sqrt(),
        ((T::one() - cos_beta) * c(0.5)).sqrt_or_zero(),
    )
}

/// Spin-weight −2, l = 2 harmonics at azimuth zero, for m = −2..=2.
fn spin_weighted_y2<T: Real>(theta: T) -> [T; 5] {
    let (s, cth) = (theta.sin(), theta.cos());
    let (lo, hi) = (T::one() - cth, T::one() + cth);
    let k2 = c::<T>((5.0 / (64.0 * PI)).sqrt());
    let k1 = c::<T>((5.0 / (16.0 * PI)).sqrt());
    let k0 = c::<T>((15.0 / (32.0 * PI)).sqrt());
    [k2 * lo * lo, k1 * s * lo, k0 * s * s, k1 * s * hi, k2 * hi * hi]
}

fn times_i<T: Real>(z: Complex<T>) -> Complex<T> {
    Complex::new(-z.im, z.re)
}

/// Per-source state, fixed before looping over frequencies.
struct PrecessionState<T> {
    core: PhenomDCore<T>,
    angles: NnloAngles<T>,
    /// `α(ω_ref) − α0`.
    alpha_offset: T,
    epsilon_offset: T,
    ylm: [T; 5],
    /// In-plane and aligned spin angular momenta for unit total mass.
    s_perp: T,
    s_l: T,
    zeta: T,
    m_sec: T,
    amp0: T,
    phase_ref: T,
    /// Linear-in-`Mf` phase ramp that zeroes the group delay at the ringdown.
    delay_slope: T,
    tc: T,
}

impl<T: Real> PrecessionState<T> {
    fn new(p: &PrecessingSpinParams<T>, f_ref: T, f_max: T) -> Self {
        let (ma, mb) = masses_from_chirp_and_ratio(p.chirp_mass, p.mass_ratio);
        let keep = ma.value() >= mb.value();
        let pick = |a: T, b: T| (T::select(keep, a, b), T::select(keep, b, a));
        let (m1, m2) = pick(ma, mb);
        let (chi1x, chi2x) = pick(p.chi1x, p.chi2x);
        let (chi1y, chi2y) = pick(p.chi1y, p.chi2y);
        let (chi1z, chi2z) = pick(p.chi1z, p.chi2z);
        let ordered = PrecessingSpinParams {
            chi1x,
            chi1y,
            chi1z,
            chi2x,
            chi2y,
            chi2z,
            ..*p
        };
        let frame = frame_params(m1, m2, &ordered, f_ref);

        let total = m1 + m2;
        let (big, small) = (m1 / total, m2 / total);
        let eta = clamp_eta(big * small);
        let s_perp = frame.chi_p * big * big;
        let s_l = chi1z * big * big + chi2z * small * small;

        let aligned = final_spin_0815(eta, big, small, chi1z, chi2z);
        let final_spin = aligned.sign() * (s_perp * s_perp + aligned * aligned).sqrt_or_zero();
        let core = PhenomDCore::new(m1, m2, chi1z, chi2z, final_spin);

        let chi_eff = big * chi1z + small * chi2z;
        let angles = NnloAngles::new(m1 / m2, chi_eff / big, frame.chi_p);

        let m_sec = total * c(MTSUN_SI);
        let mf_ref = m_sec * f_ref;
        let omega_ref = c::<T>(PI) * mf_ref;
        let mf_final = core.f_rd.min_of(m_sec * f_max);

        Self {
            alpha_offset: angles.alpha(omega_ref) - frame.alpha0,
            epsilon_offset: angles.epsilon(omega_ref),
            ylm: spin_weighted_y2(frame.theta_jn),
            s_perp,
            s_l,
            zeta: frame.zeta,
            m_sec,
            amp0: total * c(MRSUN_SI) * m_sec / (p.distance * c(MPC_SI)),
            phase_ref: core.phase(mf_ref) + c::<T>(2.0) * frame.phi_aligned,
            delay_slope: core.phase_derivative(mf_final),
            tc: p.tc,
            angles,
            core,
        }
    }

    /// Aligned-spin strain in the co-precessing frame.
    fn aligned_strain(&self, mf: T) -> Complex<T> {
        let phi = self.core.phase(mf) - self.phase_ref - self.delay_slope * mf;
        cis(-phi) * (self.amp0 * self.core.amplitude(mf))
    }

    fn polarizations(&self, f: T) -> (Complex<T>, Complex<T>) {
        let mf = self.m_sec * f;
        let omega = c::<T>(PI) * mf;
        let alpha = self.angles.alpha(omega) - self.alpha_offset;
        let epsilon = self.angles.epsilon(omega) - self.epsilon_offset;
        let (cb, sb) = half_beta(omega.cbrt(), self.core.eta, self.s_perp, self.s_l);

        let (cb2, sb2) = (cb * cb, sb * sb);
        // Wigner d^2_{2,m}(β) and d^2_{-2,m}(β) for m = -2..=2.
        let d2 = [
            sb2 * sb2,
            c::<T>(2.0) * cb * sb2 * sb,
            c::<T>(6.0_f64.sqrt()) * sb2 * cb2,
            c::<T>(2.0) * cb2 * cb * sb,
            cb2 * cb2,
        ];
        let dm2 = [d2[4], -d2[3], d2[2], -d2[1], d2[0]];
        // e^{i m α} for m = -2..=2.
        let phases = [
            cis(c::<T>(-2.0) * alpha),
            cis(-alpha),
            Complex::new(T::one(), T::zero()),
            cis(alpha),
            cis(c::<T>(2.0) * alpha),
        ];

        let mut plus_sum = Complex::new(T::zero(), T::zero());
        let mut cross_sum = Complex::new(T::zero(), T::zero());
        for k in 0..5 {
            let t_pos = phases[4 - k] * (dm2[k] * self.ylm[k]);
            let t_neg = phases[k] * (d2[k] * self.ylm[k]);
            plus_sum = plus_sum + t_pos + t_neg;
            cross_sum = cross_sum + times_i(t_pos - t_neg);
        }

        let h = cis(c::<T>(-2.0) * epsilon) * self.aligned_strain(mf) * c::<T>(0.5);
        let (hp, hc) = (h * plus_sum, h * cross_sum);

        let (sin2z, cos2z) = ((c::<T>(2.0) * self.zeta).sin(), (c::<T>(2.0) * self.zeta).cos());
        let ramp = cis(c::<T>(-2.0 * PI) * f * self.tc);
        (
            (hp * cos2z + hc * sin2z) * ramp,
            (hc * cos2z - hp * sin2z) * ramp,
        )
    }
}

/// Evaluate IMRPhenomPv2 on `grid` for every source in `batch`.
pub fn evaluate<T: Real>(
    grid: &FrequencyGrid<T>,
    batch: &PrecessingSpinBatch<T>,
    f_ref: T,
) -> Result<Polarizations<T>, WaveformError> {
    let n = batch.batch_size()?;
    evaluate_rows(Approximant::ImrPhenomPv2, grid, n, |i, freqs, plus, cross| {
        let f_max = freqs.iter().fold(T::zero(), |acc, &f| acc.max_of(f));
        let state = PrecessionState::new(&batch.get(i), f_ref, f_max);
        Zip::from(plus).and(cross).and(freqs).for_each(|hp, hc, &f| {
            (*hp, *hc) = state.polarizations(f);
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AlignedSpinBatch, AlignedSpinParams, magnitude};
    use crate::math::Dual;
    use crate::models::phenom_d;

    fn params() -> PrecessingSpinParams<f64> {
        PrecessingSpinParams {
            chirp_mass: 30.0,
            mass_ratio: 0.8,
            chi1x: 0.0,
            chi1y: 0.0,
            chi1z: 0.2,
            chi2x: 0.0,
            chi2y: 0.0,
            chi2z: -0.1,
            distance: 500.0,
            tc: 0.0,
            phase: 0.3,
            inclination: 0.5,
        }
    }

    fn precessing() -> PrecessingSpinParams<f64> {
        PrecessingSpinParams {
            chi1x: 0.5,
            chi1y: -0.2,
            chi2x: 0.1,
            chi2y: 0.3,
            ..params()
        }
    }

    #[test]
    fn aligned_limit_frame() {
        let p = params();
        let (m1, m2) = masses_from_chirp_and_ratio(p.chirp_mass, p.mass_ratio);
        let frame = frame_params(m1, m2, &p, 20.0);
        assert_eq!(frame.chi_p, 0.0);
        assert!((frame.theta_jn - p.inclination).abs() < 1e-12);
        assert_eq!(frame.alpha0, PI);
        assert!((frame.phi_aligned + (FRAC_PI_2 - p.phase)).abs() < 1e-15);
        assert!((frame.zeta + FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn chi_p_takes_the_dominant_in_plane_spin() {
        let (m1, m2) = masses_from_chirp_and_ratio(30.0, 0.5);
        let heavy = PrecessingSpinParams {
            chi1x: 0.3,
            chi1y: 0.4,
            ..params()
        };
        assert!((frame_params(m1, m2, &heavy, 20.0).chi_p - 0.5).abs() < 1e-12);

        let light = PrecessingSpinParams {
            chi2y: 0.6,
            ..params()
        };
        let a1 = 2.0 + 1.5 * m2 / m1;
        let a2 = 2.0 + 1.5 * m1 / m2;
        let expected = a2 * m2 * m2 * 0.6 / (a1 * m1 * m1);
        assert!((frame_params(m1, m2, &light, 20.0).chi_p - expected).abs() < 1e-12);
    }

    #[test]
    fn opening_angle_vanishes_without_in_plane_spin() {
        assert_eq!(half_beta(0.3, 0.24, 0.0, 0.1), (1.0, 0.0));
        let (cb, sb) = half_beta(0.3, 0.24, 0.2, 0.1);
        assert!((cb * cb + sb * sb - 1.0).abs() < 1e-15);
        assert!(sb > 0.0);
    }

    #[test]
    fn reduces_to_phenom_d_without_in_plane_spin() {
        let grid = FrequencyGrid::uniform(20.0, 300.0, 5.0).unwrap();
        let p = params();
        let pv2 = evaluate(&grid, &PrecessingSpinBatch::single(p), 20.0).unwrap();
        let d = phenom_d::evaluate(
            &grid,
            &AlignedSpinBatch::single(AlignedSpinParams {
                chirp_mass: p.chirp_mass,
                mass_ratio: p.mass_ratio,
                chi1: p.chi1z,
                chi2: p.chi2z,
                distance: p.distance,
                phase: p.phase,
                inclination: p.inclination,
            }),
            20.0,
        )
        .unwrap();

        for (a, b) in pv2.plus.iter().zip(d.plus.iter()).chain(pv2.cross.iter().zip(d.cross.iter())) {
            let (a, b) = (magnitude(a), magnitude(b));
            assert!((a - b).abs() <= 1e-9 * b, "{a} vs {b}");
        }

        // On a uniform grid, a phase offset `a + b f` has zero second difference.
        let ratio: Vec<_> = pv2.plus.iter().zip(d.plus.iter()).map(|(a, b)| a / b).collect();
        for w in ratio.windows(3) {
            let curvature = (w[2] * w[0] / (w[1] * w[1])).arg();
            assert!(curvature.abs() < 1e-6, "curvature={curvature}");
        }
    }

    #[test]
    fn group_delay_ramp_is_anchored_at_zero_frequency() {
        let p = params();
        let state = PrecessionState::new(&p, 20.0, 300.0);
        let phi_aligned = p.phase - FRAC_PI_2;
        for f in [20.0, 45.0, 120.0] {
            let mf = state.m_sec * f;
            let unit = state.aligned_strain(mf) / (state.amp0 * state.core.amplitude(mf));
            let evolved = state.core.phase(mf) - state.core.phase(state.m_sec * 20.0);
            let expected = cis(2.0 * phi_aligned + state.delay_slope * mf - evolved);
            assert!(magnitude(&(unit - expected)) < 1e-9, "f={f}");
        }
    }

    #[test]
    fn replicated_rows_are_identical() {
        let grid = FrequencyGrid::uniform(20.0, 300.0, 10.0).unwrap();
        let out = evaluate(&grid, &PrecessingSpinBatch::replicate(precessing(), 4), 20.0).unwrap();
        for row in 1..4 {
            assert_eq!(out.plus.row(row), out.plus.row(0));
            assert_eq!(out.cross.row(row), out.cross.row(0));
        }
    }

    #[test]
    fn precessing_output_is_finite_and_modulated() {
        let grid = FrequencyGrid::uniform(10.0, 300.0, 1.0).unwrap();
        let out = evaluate(&grid, &PrecessingSpinBatch::single(precessing()), 20.0).unwrap();
        assert!(out.ensure_finite().is_ok());
        let peak = out.plus.iter().map(magnitude).fold(0.0, f64::max);
        assert!(peak > 1e-24 && peak < 1e-20, "peak={peak}");

        let aligned = evaluate(&grid, &PrecessingSpinBatch::single(params()), 20.0).unwrap();
        let differs = out
            .plus
            .iter()
            .zip(aligned.plus.iter())
            .any(|(a, b)| (magnitude(a) - magnitude(b)).abs() > 1e-3 * magnitude(b));
        assert!(differs);
    }

    #[test]
    fn coalescence_time_is_a_linear_phase_ramp() {
        let grid = FrequencyGrid::uniform(20.0, 100.0, 20.0).unwrap();
        let base = evaluate(&grid, &PrecessingSpinBatch::single(precessing()), 20.0).unwrap();
        let shifted = PrecessingSpinParams {
            tc: 0.01,
            ..precessing()
        };
        let moved = evaluate(&grid, &PrecessingSpinBatch::single(shifted), 20.0).unwrap();
        for (k, f) in [20.0, 40.0, 60.0, 80.0, 100.0].into_iter().enumerate() {
            let expected = base.plus[[0, k]] * cis(-2.0 * PI * f * 0.01);
            let got = moved.plus[[0, k]];
            assert!(magnitude(&(got - expected)) < 1e-9 * magnitude(&expected));
        }
    }

    #[test]
    fn strain_is_differentiable_in_in_plane_spin() {
        let freqs = [20.0, 60.0, 150.0];
        let grid = FrequencyGrid::Shared(ndarray::Array1::from(freqs.to_vec()));
        let at = |chi1x: f64| {
            let p = PrecessingSpinParams {
                chi1x,
                ..precessing()
            };
            evaluate(&grid, &PrecessingSpinBatch::single(p), 20.0).unwrap()
        };
        let x = 0.5;
        let h = 1e-6;
        let (up, down) = (at(x + h), at(x - h));

        let q = precessing();
        let k = |x: f64| Dual::from_real(x);
        let dual_params = PrecessingSpinParams {
            chirp_mass: k(q.chirp_mass),
            mass_ratio: k(q.mass_ratio),
            chi1x: Dual::new(x, 1.0),
            chi1y: k(q.chi1y),
            chi1z: k(q.chi1z),
            chi2x: k(q.chi2x),
            chi2y: k(q.chi2y),
            chi2z: k(q.chi2z),
            distance: k(q.distance),
            tc: k(q.tc),
            phase: k(q.phase),
            inclination: k(q.inclination),
        };
        let dual_grid = FrequencyGrid::Shared(freqs.iter().map(|&f| k(f)).collect());
        let dual = evaluate(&dual_grid, &PrecessingSpinBatch::single(dual_params), k(20.0)).unwrap();

        for b in 0..freqs.len() {
            let fd = (up.plus[[0, b]].re - down.plus[[0, b]].re) / (2.0 * h);
            let ad = dual.plus[[0, b]].re.dual();
            let scale = fd.abs().max(magnitude(&up.plus[[0, b]]));
            assert!((fd - ad).abs() < 1e-4 * scale, "bin {b}: fd={fd}, ad={ad}");
        }
    }
}
