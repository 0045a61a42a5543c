//! Reference-oracle boundary.
//!
//! Waveforms from an external reference implementation are compared against
//! this crate's output on the reference's own frequency axis. Everything the
//! reference needs is carried in [`OracleConfig`]; unit conversion from solar
//! masses and megaparsecs to SI happens here and nowhere else.
//!
//! A recorded reference is stored as a [`ReferenceFixture`] JSON file: the
//! oracle configuration next to the series it returned.

use std::fs::File;
use std::path::Path;

use ndarray::{Array1, ArrayView1};
use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::constants::{MPC_SI, MSUN_SI};
use crate::conversion::{chirp_mass, mass_ratio, masses_from_chirp_and_ratio};
use crate::domain::{
    AlignedSpinBatch, AlignedSpinParams, Approximant, FrequencyGrid, PrecessingSpinBatch,
    PrecessingSpinParams, SourceParameters,
};
use crate::engine::generate;
use crate::error::WaveformError;

/// Strain is compared after multiplying by this factor.
pub const STRAIN_SCALE: f64 = 1e21;

pub const TAYLORF2_ATOL: f64 = 1e-3;
pub const PHENOM_D_ATOL: f64 = 2e-3;
pub const PHENOM_PV2_FAR_ATOL: f64 = 2e-3;
pub const PHENOM_PV2_CLOSE_ATOL: f64 = 2e-2;
/// Precessing sources closer than this (Mpc) use the looser tolerance.
pub const FAR_DISTANCE_MPC: f64 = 400.0;

/// Frequency settings shared by every oracle call in a comparison run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OracleBand {
    pub delta_f: f64,
    pub f_min: f64,
    pub f_ref: f64,
    pub f_max: f64,
}

impl Default for OracleBand {
    fn default() -> Self {
        Self {
            delta_f: 1.0 / 16.0,
            f_min: 10.0,
            f_ref: 20.0,
            f_max: 300.0,
        }
    }
}

/// Fully enumerated reference-oracle input, in SI units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleConfig {
    pub m1_kg: f64,
    pub m2_kg: f64,
    pub spin1: [f64; 3],
    pub spin2: [f64; 3],
    pub distance_m: f64,
    pub inclination: f64,
    pub phi_ref: f64,
    pub long_asc_nodes: f64,
    pub eccentricity: f64,
    pub mean_per_ano: f64,
    pub delta_f: f64,
    pub f_min: f64,
    pub f_ref: f64,
    pub f_max: f64,
    pub approximant: Approximant,
}

impl OracleConfig {
    pub fn aligned(approximant: Approximant, p: &AlignedSpinParams<f64>, band: OracleBand) -> Self {
        let (m1, m2) = masses_from_chirp_and_ratio(p.chirp_mass, p.mass_ratio);
        Self::build(
            approximant,
            (m1, m2),
            [0.0, 0.0, p.chi1],
            [0.0, 0.0, p.chi2],
            p.distance,
            p.inclination,
            p.phase,
            band,
        )
    }

    pub fn precessing(p: &PrecessingSpinParams<f64>, band: OracleBand) -> Self {
        let (m1, m2) = masses_from_chirp_and_ratio(p.chirp_mass, p.mass_ratio);
        Self::build(
            Approximant::ImrPhenomPv2,
            (m1, m2),
            [p.chi1x, p.chi1y, p.chi1z],
            [p.chi2x, p.chi2y, p.chi2z],
            p.distance,
            p.inclination,
            p.phase,
            band,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn build(
        approximant: Approximant,
        (m1, m2): (f64, f64),
        spin1: [f64; 3],
        spin2: [f64; 3],
        distance_mpc: f64,
        inclination: f64,
        phi_ref: f64,
        band: OracleBand,
    ) -> Self {
        Self {
            m1_kg: m1 * MSUN_SI,
            m2_kg: m2 * MSUN_SI,
            spin1,
            spin2,
            distance_m: distance_mpc * MPC_SI,
            inclination,
            phi_ref,
            long_asc_nodes: 0.0,
            eccentricity: 0.0,
            mean_per_ano: 0.0,
            delta_f: band.delta_f,
            f_min: band.f_min,
            f_ref: band.f_ref,
            f_max: band.f_max,
            approximant,
        }
    }

    pub fn distance_mpc(&self) -> f64 {
        self.distance_m / MPC_SI
    }

    /// The single source this configuration describes, in crate units.
    pub fn source(&self) -> SourceParameters<f64> {
        let (m1, m2) = (self.m1_kg / MSUN_SI, self.m2_kg / MSUN_SI);
        let (chirp_mass, mass_ratio) = (chirp_mass(m1, m2), mass_ratio(m1, m2));
        let distance = self.distance_mpc();
        if self.approximant.is_precessing() {
            let [chi1x, chi1y, chi1z] = self.spin1;
            let [chi2x, chi2y, chi2z] = self.spin2;
            SourceParameters::Precessing(PrecessingSpinBatch::single(PrecessingSpinParams {
                chirp_mass,
                mass_ratio,
                chi1x,
                chi1y,
                chi1z,
                chi2x,
                chi2y,
                chi2z,
                distance,
                tc: 0.0,
                phase: self.phi_ref,
                inclination: self.inclination,
            }))
        } else {
            SourceParameters::Aligned(AlignedSpinBatch::single(AlignedSpinParams {
                chirp_mass,
                mass_ratio,
                chi1: self.spin1[2],
                chi2: self.spin2[2],
                distance,
                phase: self.phi_ref,
                inclination: self.inclination,
            }))
        }
    }
}

/// A reference frequency series: bin `k` sits at `f0 + k Δf`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSeries {
    pub f0: f64,
    pub delta_f: f64,
    pub plus: Vec<Complex<f64>>,
    pub cross: Vec<Complex<f64>>,
}

/// The part of a [`ReferenceSeries`] that lies strictly inside a band.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceBand {
    pub frequencies: Array1<f64>,
    pub plus: Array1<Complex<f64>>,
    pub cross: Array1<Complex<f64>>,
}

impl ReferenceBand {
    pub fn grid(&self) -> FrequencyGrid<f64> {
        FrequencyGrid::Shared(self.frequencies.clone())
    }
}

impl ReferenceSeries {
    pub fn frequencies(&self) -> Array1<f64> {
        (0..self.plus.len())
            .map(|k| self.f0 + k as f64 * self.delta_f)
            .collect()
    }

    /// Keep bins with `f_min < f < f_max`.
    pub fn band(&self, f_min: f64, f_max: f64) -> Result<ReferenceBand, WaveformError> {
        if self.plus.len() != self.cross.len() {
            return Err(WaveformError::BatchShape {
                name: "cross",
                len: self.cross.len(),
                expected: self.plus.len(),
            });
        }
        let keep: Vec<usize> = self
            .frequencies()
            .iter()
            .enumerate()
            .filter(|(_, f)| **f > f_min && **f < f_max)
            .map(|(k, _)| k)
            .collect();
        Ok(ReferenceBand {
            frequencies: keep.iter().map(|&k| self.f0 + k as f64 * self.delta_f).collect(),
            plus: keep.iter().map(|&k| self.plus[k]).collect(),
            cross: keep.iter().map(|&k| self.cross[k]).collect(),
        })
    }
}

/// Absolute tolerance on scaled strain for `approximant` at `distance_mpc`.
pub fn tolerance(approximant: Approximant, distance_mpc: f64) -> f64 {
    match approximant {
        Approximant::TaylorF2 => TAYLORF2_ATOL,
        Approximant::ImrPhenomD => PHENOM_D_ATOL,
        Approximant::ImrPhenomPv2 if distance_mpc > FAR_DISTANCE_MPC => PHENOM_PV2_FAR_ATOL,
        Approximant::ImrPhenomPv2 => PHENOM_PV2_CLOSE_ATOL,
    }
}

/// Largest scaled deviation per polarization and component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    pub plus_re: f64,
    pub plus_im: f64,
    pub cross_re: f64,
    pub cross_im: f64,
    pub tolerance: f64,
}

impl Comparison {
    pub fn worst(&self) -> f64 {
        self.plus_re.max(self.plus_im).max(self.cross_re).max(self.cross_im)
    }

    pub fn passed(&self) -> bool {
        self.worst() < self.tolerance
    }
}

fn max_deviation(
    ours: ArrayView1<'_, Complex<f64>>,
    reference: ArrayView1<'_, Complex<f64>>,
    part: fn(&Complex<f64>) -> f64,
) -> f64 {
    ours.iter()
        .zip(reference.iter())
        .map(|(a, b)| (STRAIN_SCALE * (part(a) - part(b))).abs())
        .fold(0.0, f64::max)
}

/// A reference series recorded together with the configuration that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceFixture {
    pub config: OracleConfig,
    pub series: ReferenceSeries,
}

impl ReferenceFixture {
    pub fn load(path: &Path) -> Result<Self, WaveformError> {
        let file = File::open(path)
            .map_err(|e| WaveformError::io(format!("failed to open {}", path.display()), e))?;
        serde_json::from_reader(file)
            .map_err(|e| WaveformError::Parse(format!("invalid reference fixture {}: {e}", path.display())))
    }

    pub fn save(&self, path: &Path) -> Result<(), WaveformError> {
        let file = File::create(path)
            .map_err(|e| WaveformError::io(format!("failed to create {}", path.display()), e))?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| WaveformError::Parse(format!("failed to write reference fixture: {e}")))
    }

    /// Evaluate the configured model inside the configured band and compare
    /// against the recorded series with the model's tolerance.
    pub fn check(&self) -> Result<Comparison, WaveformError> {
        let cfg = &self.config;
        let band = self.series.band(cfg.f_min, cfg.f_max)?;
        if band.frequencies.is_empty() {
            return Err(WaveformError::InvalidFrequencyGrid(format!(
                "reference has no bins inside ({}, {}) Hz",
                cfg.f_min, cfg.f_max
            )));
        }
        let out = generate(cfg.approximant, &band.grid(), &cfg.source(), cfg.f_ref)?;
        compare(
            out.plus.row(0),
            out.cross.row(0),
            &band,
            tolerance(cfg.approximant, cfg.distance_mpc()),
        )
    }
}

/// Compare one row of model output against a reference band.
pub fn compare(
    plus: ArrayView1<'_, Complex<f64>>,
    cross: ArrayView1<'_, Complex<f64>>,
    reference: &ReferenceBand,
    tolerance: f64,
) -> Result<Comparison, WaveformError> {
    let expected = reference.frequencies.len();
    for (name, len) in [("plus", plus.len()), ("cross", cross.len())] {
        if len != expected {
            return Err(WaveformError::BatchShape { name, len, expected });
        }
    }
    let re = |z: &Complex<f64>| z.re;
    let im = |z: &Complex<f64>| z.im;
    Ok(Comparison {
        plus_re: max_deviation(plus, reference.plus.view(), re),
        plus_im: max_deviation(plus, reference.plus.view(), im),
        cross_re: max_deviation(cross, reference.cross.view(), re),
        cross_im: max_deviation(cross, reference.cross.view(), im),
        tolerance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> ReferenceSeries {
        let n = 8;
        ReferenceSeries {
            f0: 0.0,
            delta_f: 2.0,
            plus: (0..n).map(|k| Complex::new(k as f64, 0.0)).collect(),
            cross: (0..n).map(|k| Complex::new(0.0, -(k as f64))).collect(),
        }
    }

    #[test]
    fn frequency_axis_is_reconstructed_from_f0_and_step() {
        let s = ReferenceSeries { f0: 1.5, ..series() };
        let f = s.frequencies();
        assert_eq!(f.len(), 8);
        assert_eq!(f[0], 1.5);
        assert_eq!(f[7], 15.5);
    }

    #[test]
    fn band_excludes_both_edges() {
        let band = series().band(4.0, 10.0).unwrap();
        assert_eq!(band.frequencies.to_vec(), vec![6.0, 8.0]);
        assert_eq!(band.plus.to_vec(), vec![Complex::new(3.0, 0.0), Complex::new(4.0, 0.0)]);
        assert_eq!(band.cross[1], Complex::new(0.0, -4.0));
    }

    #[test]
    fn tolerance_depends_on_distance_only_for_precessing() {
        assert_eq!(tolerance(Approximant::TaylorF2, 100.0), TAYLORF2_ATOL);
        assert_eq!(tolerance(Approximant::ImrPhenomD, 100.0), PHENOM_D_ATOL);
        assert_eq!(tolerance(Approximant::ImrPhenomPv2, 1000.0), PHENOM_PV2_FAR_ATOL);
        assert_eq!(tolerance(Approximant::ImrPhenomPv2, 200.0), PHENOM_PV2_CLOSE_ATOL);
    }

    #[test]
    fn config_converts_units_at_the_boundary() {
        let p = AlignedSpinParams {
            chirp_mass: 20.0,
            mass_ratio: 1.0,
            chi1: 0.1,
            chi2: 0.2,
            distance: 100.0,
            phase: 0.0,
            inclination: 0.3,
        };
        let cfg = OracleConfig::aligned(Approximant::ImrPhenomD, &p, OracleBand::default());
        assert!((cfg.m1_kg - cfg.m2_kg).abs() < 1e-6 * cfg.m1_kg);
        assert!((cfg.distance_mpc() - 100.0).abs() < 1e-9);
        assert_eq!(cfg.spin2, [0.0, 0.0, 0.2]);
        assert_eq!(cfg.f_max, 300.0);
    }

    #[test]
    fn model_output_compares_equal_to_itself() {
        let reference = ReferenceSeries {
            f0: 0.0,
            delta_f: 0.5,
            plus: vec![Complex::new(0.0, 0.0); 400],
            cross: vec![Complex::new(0.0, 0.0); 400],
        };
        let band = reference.band(10.0, 150.0).unwrap();
        let params = SourceParameters::Aligned(AlignedSpinBatch::single(AlignedSpinParams {
            chirp_mass: 25.0,
            mass_ratio: 0.7,
            chi1: 0.0,
            chi2: 0.0,
            distance: 800.0,
            phase: 0.0,
            inclination: 0.0,
        }));
        let out = generate(Approximant::TaylorF2, &band.grid(), &params, 20.0).unwrap();
        let filled = ReferenceBand {
            plus: out.plus.row(0).to_owned(),
            cross: out.cross.row(0).to_owned(),
            ..band.clone()
        };
        let same = compare(out.plus.row(0), out.cross.row(0), &filled, TAYLORF2_ATOL).unwrap();
        assert_eq!(same.worst(), 0.0);
        assert!(same.passed());

        let against_zero = compare(out.plus.row(0), out.cross.row(0), &band, TAYLORF2_ATOL).unwrap();
        assert!(against_zero.worst() > 0.0);
    }

    fn recorded(approximant: Approximant, config: OracleConfig) -> ReferenceFixture {
        let f0 = config.delta_f;
        let n = (config.f_max / config.delta_f) as usize + 2;
        let axis = FrequencyGrid::Shared((0..n).map(|k| f0 + k as f64 * config.delta_f).collect());
        let out = generate(approximant, &axis, &config.source(), config.f_ref).unwrap();
        ReferenceFixture {
            series: ReferenceSeries {
                f0,
                delta_f: config.delta_f,
                plus: out.plus.row(0).to_vec(),
                cross: out.cross.row(0).to_vec(),
            },
            config,
        }
    }

    #[test]
    fn config_round_trips_to_the_same_source() {
        let p = PrecessingSpinParams {
            chirp_mass: 30.0,
            mass_ratio: 0.8,
            chi1x: 0.2,
            chi1y: -0.1,
            chi1z: 0.3,
            chi2x: 0.0,
            chi2y: 0.4,
            chi2z: -0.2,
            distance: 500.0,
            tc: 0.0,
            phase: 0.7,
            inclination: 0.5,
        };
        let SourceParameters::Precessing(back) = OracleConfig::precessing(&p, OracleBand::default()).source()
        else {
            panic!("expected precessing source");
        };
        let q = back.get(0);
        assert!((q.chirp_mass - p.chirp_mass).abs() < 1e-9);
        assert!((q.mass_ratio - p.mass_ratio).abs() < 1e-12);
        assert!((q.distance - p.distance).abs() < 1e-9);
        assert_eq!((q.chi1y, q.chi2y, q.phase), (p.chi1y, p.chi2y, p.phase));
    }

    #[test]
    fn fixture_on_disk_checks_against_the_model() {
        let p = AlignedSpinParams {
            chirp_mass: 30.0,
            mass_ratio: 0.8,
            chi1: 0.1,
            chi2: -0.1,
            distance: 500.0,
            phase: 0.0,
            inclination: 0.5,
        };
        let band = OracleBand {
            delta_f: 0.5,
            ..OracleBand::default()
        };
        let fixture = recorded(Approximant::TaylorF2, OracleConfig::aligned(Approximant::TaylorF2, &p, band));
        let path = std::env::temp_dir().join(format!("gwf-fixture-{}.json", std::process::id()));
        fixture.save(&path).unwrap();
        let loaded = ReferenceFixture::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let result = loaded.check().unwrap();
        assert!(result.passed(), "{result:?}");
        assert_eq!(result.tolerance, TAYLORF2_ATOL);

        // A 5% amplitude error on the recorded side is caught.
        let mut off = loaded.clone();
        off.series.plus.iter_mut().for_each(|z| *z *= 1.05);
        assert!(!off.check().unwrap().passed());
    }

    #[test]
    fn fixture_json_layout_is_stable() {
        let text = r#"{
            "config": {
                "m1_kg": 6.0e31, "m2_kg": 5.0e31,
                "spin1": [0.0, 0.0, 0.1], "spin2": [0.0, 0.0, -0.1],
                "distance_m": 1.5428387e25, "inclination": 0.5, "phi_ref": 0.0,
                "long_asc_nodes": 0.0, "eccentricity": 0.0, "mean_per_ano": 0.0,
                "delta_f": 0.0625, "f_min": 10.0, "f_ref": 20.0, "f_max": 300.0,
                "approximant": "imrphenomd"
            },
            "series": { "f0": 0.0, "delta_f": 0.0625, "plus": [[1.0, -2.0]], "cross": [[0.5, 0.0]] }
        }"#;
        let fixture: ReferenceFixture = serde_json::from_str(text).unwrap();
        assert_eq!(fixture.config.approximant, Approximant::ImrPhenomD);
        assert_eq!(fixture.series.plus[0], Complex::new(1.0, -2.0));
        assert!((fixture.config.distance_mpc() - 500.0).abs() < 1e-3);
        // The single bin sits at 0 Hz, outside (10, 300).
        assert!(fixture.check().is_err());
    }
}
