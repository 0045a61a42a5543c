//! Aligned-spin post-Newtonian phasing coefficients (3.5PN).
//!
//! The frequency-domain stationary-phase phase is
//!
//! ```text
//! Ψ(v) = Σ_k (v_k + vlogv_k ln v) v^(k-5),   v = (π M f)^(1/3)
//! ```
//!
//! with every coefficient already scaled by the Newtonian prefactor
//! `3 / (128 η)`. Spin-orbit terms enter at 1.5, 2.5, 3 and 3.5PN; spin-spin
//! terms at 2PN and 3PN. Black holes only (quadrupole-monopole parameter 1).

use std::f64::consts::PI;

use crate::constants::EULER_GAMMA;
use crate::math::{Real, c};

#[derive(Debug, Clone, Copy)]
pub struct PnPhasing<T> {
    pub v: [T; 8],
    pub vlogv5: T,
    pub vlogv6: T,
}

fn so_25pn<T: Real>(m: T) -> T {
    -m * (c::<T>(1391.5 / 8.4) - m * (T::one() - m) * c(10.0 / 3.0)
        + m * (c::<T>(1276.0 / 8.1) + m * (T::one() - m) * c(170.0 / 9.0)))
}

fn so_3pn<T: Real>(m: T) -> T {
    c::<T>(PI) * m * (c::<T>(1490.0 / 3.0) + m * c(260.0))
}

fn so_35pn<T: Real>(m: T, eta: T) -> T {
    m * (c::<T>(-17097.8035 / 4.8384)
        + eta * c(28764.25 / 6.72)
        + eta * eta * c(47.35 / 1.44)
        + m * (c::<T>(-7189.233785 / 1.524096) + eta * c(458.555 / 3.024)
            - eta * eta * c(534.5 / 7.2)))
}

/// 3PN spin-spin contribution of one body: quadrupole-monopole plus self-spin.
fn ss_3pn_single<T: Real>(m: T, chi: T) -> T {
    let qm = c::<T>(4703.5 / 8.4) + c::<T>(2935.0 / 6.0) * m - c::<T>(120.0) * m * m;
    let self_spin = c::<T>(-4108.25 / 6.72) - c::<T>(108.5 / 1.2) * m + c::<T>(125.5 / 3.6) * m * m;
    (qm + self_spin) * m * m * chi * chi
}

impl<T: Real> PnPhasing<T> {
    /// Coefficients for component masses `m1, m2` (any common unit) and aligned
    /// spins. `spin_spin_3pn = false` drops the 3PN spin-spin terms, which the
    /// phenomenological model recalibrates itself.
    pub fn new(m1: T, m2: T, chi1: T, chi2: T, spin_spin_3pn: bool) -> Self {
        let total = m1 + m2;
        let m1m = m1 / total;
        let m2m = m2 / total;
        let eta = m1 * m2 / (total * total);
        let eta2 = eta * eta;
        let pi = c::<T>(PI);
        let pfa_n = c::<T>(3.0 / 128.0) / eta;

        let v0 = T::one();
        let v1 = T::zero();
        let v2 = c::<T>(5.0 / 9.0) * (c::<T>(743.0 / 84.0) + c::<T>(11.0) * eta);

        let v3 = c::<T>(-16.0) * pi
            + m1m * (c::<T>(25.0) + c::<T>(38.0 / 3.0) * m1m) * chi1
            + m2m * (c::<T>(25.0) + c::<T>(38.0 / 3.0) * m2m) * chi2;

        let sigma = eta * c::<T>(721.0 / 48.0 - 247.0 / 48.0) * chi1 * chi2
            + c::<T>(719.0 / 96.0 - 233.0 / 96.0) * (m1m * m1m * chi1 * chi1 + m2m * m2m * chi2 * chi2);
        let v4 = c::<T>(5.0 / 72.0)
            * (c::<T>(3058673.0 / 7056.0) + c::<T>(5429.0 / 7.0) * eta + c::<T>(617.0) * eta2)
            - c::<T>(10.0) * sigma;

        let so5 = so_25pn(m1m) * chi1 + so_25pn(m2m) * chi2;
        let nonspin5 = (c::<T>(7729.0 / 84.0) - c::<T>(13.0) * eta) * pi;
        let v5 = c::<T>(5.0 / 9.0) * nonspin5 + so5;
        let vlogv5 = c::<T>(5.0 / 3.0) * nonspin5 + c::<T>(3.0) * so5;

        let mut v6 = c::<T>(11583.231236531 / 4.694215680 - 640.0 / 3.0 * PI * PI - 6848.0 / 21.0 * EULER_GAMMA)
            + eta * c::<T>(-15737.765635 / 3.048192 + 2255.0 / 12.0 * PI * PI)
            + c::<T>(76055.0 / 1728.0) * eta2
            - c::<T>(127825.0 / 1296.0) * eta2 * eta
            + c::<T>(-6848.0 / 21.0 * 4.0_f64.ln())
            + so_3pn(m1m) * chi1
            + so_3pn(m2m) * chi2;
        if spin_spin_3pn {
            v6 += (c::<T>(326.75 / 1.12) + c::<T>(557.5 / 1.8) * eta) * eta * chi1 * chi2
                + ss_3pn_single(m1m, chi1)
                + ss_3pn_single(m2m, chi2);
        }
        let vlogv6 = c::<T>(-6848.0 / 21.0);

        let v7 = pi
            * (c::<T>(77096675.0 / 254016.0) + c::<T>(378515.0 / 1512.0) * eta
                - c::<T>(74045.0 / 756.0) * eta2)
            + so_35pn(m1m, eta) * chi1
            + so_35pn(m2m, eta) * chi2;

        Self {
            v: [v0, v1, v2, v3, v4, v5, v6, v7].map(|x| x * pfa_n),
            vlogv5: vlogv5 * pfa_n,
            vlogv6: vlogv6 * pfa_n,
        }
    }

    /// `Ψ(v)`.
    pub fn phase(&self, v: T) -> T {
        let [v0, v1, v2, v3, v4, v5, v6, v7] = self.v;
        let ln_v = v.ln();
        let v_2 = v * v;
        let v_3 = v_2 * v;
        let v_4 = v_3 * v;
        let v_5 = v_4 * v;
        let series = v7 * v_5 * v_2
            + (v6 + self.vlogv6 * ln_v) * v_5 * v
            + (v5 + self.vlogv5 * ln_v) * v_5
            + v4 * v_4
            + v3 * v_3
            + v2 * v_2
            + v1 * v
            + v0;
        series / v_5
    }

    /// `dΨ/dv`.
    pub fn phase_dv(&self, v: T) -> T {
        let [v0, v1, v2, v3, v4, _, v6, v7] = self.v;
        let ln_v = v.ln();
        let v_2 = v * v;
        let v_3 = v_2 * v;
        let v_4 = v_3 * v;
        let v_5 = v_4 * v;
        let v_6 = v_5 * v;
        let series = c::<T>(2.0) * v7 * v_6 * v
            + (v6 + self.vlogv6 * (T::one() + ln_v)) * v_6
            + self.vlogv5 * v_5
            - v4 * v_4
            - c::<T>(2.0) * v3 * v_3
            - c::<T>(3.0) * v2 * v_2
            - c::<T>(4.0) * v1 * v
            - c::<T>(5.0) * v0;
        series / v_6
    }
}
