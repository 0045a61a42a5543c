//! Shared domain types.
//!
//! Parameter batches store one 1-D array per physical parameter. Every array has
//! either length 1 (broadcast) or the common batch size `B`. Outputs are always
//! shaped `[B, F]` with `F` the number of frequencies.

use clap::ValueEnum;
use ndarray::{Array1, Array2, ArrayView1, Axis};
use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::error::WaveformError;
use crate::math::Real;

/// Closed set of waveform models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Approximant {
    #[value(name = "taylorf2")]
    TaylorF2,
    #[value(name = "phenomd")]
    #[serde(rename = "imrphenomd")]
    ImrPhenomD,
    #[value(name = "phenompv2")]
    #[serde(rename = "imrphenompv2")]
    ImrPhenomPv2,
}

impl Approximant {
    /// Name used by the reference simulator.
    pub fn display_name(self) -> &'static str {
        match self {
            Approximant::TaylorF2 => "TaylorF2",
            Approximant::ImrPhenomD => "IMRPhenomD",
            Approximant::ImrPhenomPv2 => "IMRPhenomPv2",
        }
    }

    pub fn is_precessing(self) -> bool {
        matches!(self, Approximant::ImrPhenomPv2)
    }
}

/// One aligned-spin source. Masses in M☉, distance in Mpc, angles in rad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedSpinParams<T> {
    pub chirp_mass: T,
    /// `m2 / m1`.
    pub mass_ratio: T,
    pub chi1: T,
    pub chi2: T,
    pub distance: T,
    pub phase: T,
    pub inclination: T,
}

/// One precessing source: Cartesian spins in the L-aligned frame at `f_ref`
/// (see [`crate::conversion::precessing_spins_to_cartesian`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecessingSpinParams<T> {
    pub chirp_mass: T,
    pub mass_ratio: T,
    pub chi1x: T,
    pub chi1y: T,
    pub chi1z: T,
    pub chi2x: T,
    pub chi2y: T,
    pub chi2z: T,
    pub distance: T,
    /// Coalescence time offset, seconds.
    pub tc: T,
    pub phase: T,
    pub inclination: T,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSpinBatch<T> {
    pub chirp_mass: Array1<T>,
    pub mass_ratio: Array1<T>,
    pub chi1: Array1<T>,
    pub chi2: Array1<T>,
    pub distance: Array1<T>,
    pub phase: Array1<T>,
    pub inclination: Array1<T>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrecessingSpinBatch<T> {
    pub chirp_mass: Array1<T>,
    pub mass_ratio: Array1<T>,
    pub chi1x: Array1<T>,
    pub chi1y: Array1<T>,
    pub chi1z: Array1<T>,
    pub chi2x: Array1<T>,
    pub chi2y: Array1<T>,
    pub chi2z: Array1<T>,
    pub distance: Array1<T>,
    pub tc: Array1<T>,
    pub phase: Array1<T>,
    pub inclination: Array1<T>,
}

/// Common batch size of a set of named arrays, honoring length-1 broadcast.
fn broadcast_len(lens: &[(&'static str, usize)]) -> Result<usize, WaveformError> {
    let batch = lens.iter().map(|(_, n)| *n).max().unwrap_or(0);
    if batch == 0 {
        let name = lens.iter().find(|(_, n)| *n == 0).map_or("parameters", |(n, _)| *n);
        return Err(WaveformError::BatchShape {
            name,
            len: 0,
            expected: 1,
        });
    }
    for &(name, len) in lens {
        if len != 1 && len != batch {
            return Err(WaveformError::BatchShape {
                name,
                len,
                expected: batch,
            });
        }
    }
    Ok(batch)
}

#[inline]
fn at<T: Copy>(a: &Array1<T>, i: usize) -> T {
    if a.len() == 1 { a[0] } else { a[i] }
}

fn check_finite<T: Real>(name: &'static str, a: &Array1<T>) -> Result<(), WaveformError> {
    match a.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(WaveformError::invalid(name, index, "not finite")),
        None => Ok(()),
    }
}

fn check_each<T: Real>(
    name: &'static str,
    a: &Array1<T>,
    ok: impl Fn(f64) -> bool,
    reason: &str,
) -> Result<(), WaveformError> {
    check_finite(name, a)?;
    match a.iter().position(|v| !ok(v.value())) {
        Some(index) => Err(WaveformError::invalid(name, index, reason)),
        None => Ok(()),
    }
}

impl<T: Real> AlignedSpinBatch<T> {
    pub fn single(p: AlignedSpinParams<T>) -> Self {
        Self::from_rows(&[p])
    }

    /// `n` identical rows.
    pub fn replicate(p: AlignedSpinParams<T>, n: usize) -> Self {
        Self::from_rows(&vec![p; n])
    }

    pub fn from_rows(rows: &[AlignedSpinParams<T>]) -> Self {
        let col = |f: fn(&AlignedSpinParams<T>) -> T| rows.iter().map(f).collect::<Array1<T>>();
        Self {
            chirp_mass: col(|p| p.chirp_mass),
            mass_ratio: col(|p| p.mass_ratio),
            chi1: col(|p| p.chi1),
            chi2: col(|p| p.chi2),
            distance: col(|p| p.distance),
            phase: col(|p| p.phase),
            inclination: col(|p| p.inclination),
        }
    }

    pub fn batch_size(&self) -> Result<usize, WaveformError> {
        broadcast_len(&[
            ("chirp_mass", self.chirp_mass.len()),
            ("mass_ratio", self.mass_ratio.len()),
            ("chi1", self.chi1.len()),
            ("chi2", self.chi2.len()),
            ("distance", self.distance.len()),
            ("phase", self.phase.len()),
            ("inclination", self.inclination.len()),
        ])
    }

    /// Row `i` with broadcasting applied.
    pub fn get(&self, i: usize) -> AlignedSpinParams<T> {
        AlignedSpinParams {
            chirp_mass: at(&self.chirp_mass, i),
            mass_ratio: at(&self.mass_ratio, i),
            chi1: at(&self.chi1, i),
            chi2: at(&self.chi2, i),
            distance: at(&self.distance, i),
            phase: at(&self.phase, i),
            inclination: at(&self.inclination, i),
        }
    }

    /// Reject physically invalid parameters. Returns the batch size.
    pub fn validate(&self) -> Result<usize, WaveformError> {
        let batch = self.batch_size()?;
        check_each("chirp_mass", &self.chirp_mass, |v| v > 0.0, "must be positive")?;
        check_each("mass_ratio", &self.mass_ratio, |v| v > 0.0, "must be positive")?;
        check_each("chi1", &self.chi1, |v| v.abs() <= 1.0, "spin magnitude above 1")?;
        check_each("chi2", &self.chi2, |v| v.abs() <= 1.0, "spin magnitude above 1")?;
        check_each("distance", &self.distance, |v| v > 0.0, "must be positive")?;
        check_finite("phase", &self.phase)?;
        check_finite("inclination", &self.inclination)?;
        Ok(batch)
    }
}

impl<T: Real> PrecessingSpinBatch<T> {
    pub fn single(p: PrecessingSpinParams<T>) -> Self {
        Self::from_rows(&[p])
    }

    pub fn replicate(p: PrecessingSpinParams<T>, n: usize) -> Self {
        Self::from_rows(&vec![p; n])
    }

    pub fn from_rows(rows: &[PrecessingSpinParams<T>]) -> Self {
        let col =
            |f: fn(&PrecessingSpinParams<T>) -> T| rows.iter().map(f).collect::<Array1<T>>();
        Self {
            chirp_mass: col(|p| p.chirp_mass),
            mass_ratio: col(|p| p.mass_ratio),
            chi1x: col(|p| p.chi1x),
            chi1y: col(|p| p.chi1y),
            chi1z: col(|p| p.chi1z),
            chi2x: col(|p| p.chi2x),
            chi2y: col(|p| p.chi2y),
            chi2z: col(|p| p.chi2z),
            distance: col(|p| p.distance),
            tc: col(|p| p.tc),
            phase: col(|p| p.phase),
            inclination: col(|p| p.inclination),
        }
    }

    pub fn batch_size(&self) -> Result<usize, WaveformError> {
        broadcast_len(&[
            ("chirp_mass", self.chirp_mass.len()),
            ("mass_ratio", self.mass_ratio.len()),
            ("chi1x", self.chi1x.len()),
            ("chi1y", self.chi1y.len()),
            ("chi1z", self.chi1z.len()),
            ("chi2x", self.chi2x.len()),
            ("chi2y", self.chi2y.len()),
            ("chi2z", self.chi2z.len()),
            ("distance", self.distance.len()),
            ("tc", self.tc.len()),
            ("phase", self.phase.len()),
            ("inclination", self.inclination.len()),
        ])
    }

    pub fn get(&self, i: usize) -> PrecessingSpinParams<T> {
        PrecessingSpinParams {
            chirp_mass: at(&self.chirp_mass, i),
            mass_ratio: at(&self.mass_ratio, i),
            chi1x: at(&self.chi1x, i),
            chi1y: at(&self.chi1y, i),
            chi1z: at(&self.chi1z, i),
            chi2x: at(&self.chi2x, i),
            chi2y: at(&self.chi2y, i),
            chi2z: at(&self.chi2z, i),
            distance: at(&self.distance, i),
            tc: at(&self.tc, i),
            phase: at(&self.phase, i),
            inclination: at(&self.inclination, i),
        }
    }

    pub fn validate(&self) -> Result<usize, WaveformError> {
        let batch = self.batch_size()?;
        check_each("chirp_mass", &self.chirp_mass, |v| v > 0.0, "must be positive")?;
        check_each("mass_ratio", &self.mass_ratio, |v| v > 0.0, "must be positive")?;
        for (name, a) in [
            ("chi1x", &self.chi1x),
            ("chi1y", &self.chi1y),
            ("chi1z", &self.chi1z),
            ("chi2x", &self.chi2x),
            ("chi2y", &self.chi2y),
            ("chi2z", &self.chi2z),
        ] {
            check_finite(name, a)?;
        }
        for i in 0..batch {
            let p = self.get(i);
            let s1 = (p.chi1x * p.chi1x + p.chi1y * p.chi1y + p.chi1z * p.chi1z).value();
            let s2 = (p.chi2x * p.chi2x + p.chi2y * p.chi2y + p.chi2z * p.chi2z).value();
            if s1 > 1.0 {
                return Err(WaveformError::invalid("chi1", i, "spin magnitude above 1"));
            }
            if s2 > 1.0 {
                return Err(WaveformError::invalid("chi2", i, "spin magnitude above 1"));
            }
        }
        check_each("distance", &self.distance, |v| v > 0.0, "must be positive")?;
        check_finite("tc", &self.tc)?;
        check_finite("phase", &self.phase)?;
        check_finite("inclination", &self.inclination)?;
        Ok(batch)
    }
}

/// Parameters for any model, tagged by spin description.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceParameters<T> {
    Aligned(AlignedSpinBatch<T>),
    Precessing(PrecessingSpinBatch<T>),
}

impl<T: Real> SourceParameters<T> {
    pub fn batch_size(&self) -> Result<usize, WaveformError> {
        match self {
            SourceParameters::Aligned(b) => b.batch_size(),
            SourceParameters::Precessing(b) => b.batch_size(),
        }
    }

    pub fn validate(&self) -> Result<usize, WaveformError> {
        match self {
            SourceParameters::Aligned(b) => b.validate(),
            SourceParameters::Precessing(b) => b.validate(),
        }
    }
}

/// Frequencies in Hz, shared by the batch or one row per batch element.
#[derive(Debug, Clone, PartialEq)]
pub enum FrequencyGrid<T> {
    Shared(Array1<T>),
    PerSample(Array2<T>),
}

impl FrequencyGrid<f64> {
    /// `f_min, f_min + Δf, ...` up to and including `f_max` (within rounding).
    pub fn uniform(f_min: f64, f_max: f64, delta_f: f64) -> Result<Self, WaveformError> {
        if !(f_min.is_finite() && f_max.is_finite() && delta_f.is_finite()) {
            return Err(WaveformError::InvalidFrequencyGrid(format!(
                "non-finite range: f_min={f_min}, f_max={f_max}, delta_f={delta_f}"
            )));
        }
        if !(f_min > 0.0 && f_max > f_min && delta_f > 0.0) {
            return Err(WaveformError::InvalidFrequencyGrid(format!(
                "need 0 < f_min < f_max and delta_f > 0 (got f_min={f_min}, f_max={f_max}, delta_f={delta_f})"
            )));
        }
        let steps = ((f_max - f_min) / delta_f + 1e-9).floor() as usize + 1;
        Ok(Self::Shared(Array1::from_iter(
            (0..steps).map(|k| f_min + delta_f * k as f64),
        )))
    }

    /// `steps` log-spaced points between `f_min` and `f_max` inclusive.
    pub fn log_spaced(f_min: f64, f_max: f64, steps: usize) -> Result<Self, WaveformError> {
        if !(f_min.is_finite() && f_max.is_finite() && f_min > 0.0 && f_max > f_min) {
            return Err(WaveformError::InvalidFrequencyGrid(format!(
                "invalid range: f_min={f_min}, f_max={f_max} (must be finite, >0, and f_max>f_min)"
            )));
        }
        if steps < 2 {
            return Err(WaveformError::InvalidFrequencyGrid(
                "log-spaced grid needs at least 2 points".to_string(),
            ));
        }
        let ln_min = f_min.ln();
        let step = (f_max.ln() - ln_min) / (steps as f64 - 1.0);
        Ok(Self::Shared(Array1::from_iter(
            (0..steps).map(|i| (ln_min + step * i as f64).exp()),
        )))
    }
}

impl<T: Real> FrequencyGrid<T> {
    pub fn len(&self) -> usize {
        match self {
            FrequencyGrid::Shared(f) => f.len(),
            FrequencyGrid::PerSample(f) => f.ncols(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Frequencies seen by batch element `i`.
    pub fn row(&self, i: usize) -> ArrayView1<'_, T> {
        match self {
            FrequencyGrid::Shared(f) => f.view(),
            FrequencyGrid::PerSample(f) => f.row(i),
        }
    }

    /// A per-sample grid must have one row per batch element.
    pub fn check_shape(&self, batch: usize) -> Result<(), WaveformError> {
        match self {
            FrequencyGrid::PerSample(f) if f.nrows() != batch => {
                Err(WaveformError::InvalidFrequencyGrid(format!(
                    "per-sample grid has {} rows, batch size is {batch}",
                    f.nrows()
                )))
            }
            _ => Ok(()),
        }
    }

    /// Structural and value checks; `batch` is the parameter batch size.
    pub fn validate(&self, batch: usize) -> Result<(), WaveformError> {
        if self.is_empty() {
            return Err(WaveformError::InvalidFrequencyGrid("grid is empty".to_string()));
        }
        self.check_shape(batch)?;
        let rows = match self {
            FrequencyGrid::Shared(_) => 1,
            FrequencyGrid::PerSample(_) => batch,
        };
        for r in 0..rows {
            let row = self.row(r);
            for (k, f) in row.iter().enumerate() {
                let v = f.value();
                if !(v.is_finite() && v > 0.0) {
                    return Err(WaveformError::InvalidFrequencyGrid(format!(
                        "row {r}, index {k}: frequency {v} is not positive and finite"
                    )));
                }
                if k > 0 && v <= row[k - 1].value() {
                    return Err(WaveformError::InvalidFrequencyGrid(format!(
                        "row {r}, index {k}: frequencies must be strictly increasing"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Complex strain polarizations, `[batch, frequency]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polarizations<T> {
    pub cross: Array2<Complex<T>>,
    pub plus: Array2<Complex<T>>,
}

impl<T: Real> Polarizations<T> {
    pub fn zeros(batch: usize, n_freq: usize) -> Self {
        Self {
            cross: Array2::zeros((batch, n_freq)),
            plus: Array2::zeros((batch, n_freq)),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.plus.len_of(Axis(0))
    }

    /// Error on the first non-finite element (plus checked before cross).
    pub fn ensure_finite(&self) -> Result<(), WaveformError> {
        for (polarization, data) in [("plus", &self.plus), ("cross", &self.cross)] {
            if let Some(((index, bin), _)) = data
                .indexed_iter()
                .find(|(_, h)| !(h.re.is_finite() && h.im.is_finite()))
            {
                return Err(WaveformError::NonFinite {
                    polarization,
                    index,
                    bin,
                });
            }
        }
        Ok(())
    }
}

/// `|h|`, as `sqrt(re² + im²)`.
pub fn magnitude<T: Real>(h: &Complex<T>) -> T {
    (h.re * h.re + h.im * h.im).sqrt()
}
