//! Batched evaluation engine.
//!
//! Responsibilities:
//!
//! - allocate `[batch, frequency]` outputs
//! - evaluate batch rows in parallel (rayon over ndarray rows)
//! - dispatch a model choice onto its evaluator (`generate`)
//!
//! Rows never share state, so evaluation order does not affect the result.

use ndarray::{ArrayView1, ArrayViewMut1, Axis};
use num_complex::Complex;
use rayon::prelude::*;
use tracing::debug;

use crate::domain::{Approximant, FrequencyGrid, Polarizations, SourceParameters};
use crate::error::WaveformError;
use crate::math::Real;
use crate::models::{phenom_d, phenom_pv2, taylorf2};

/// Run `kernel(row, frequencies, plus, cross)` for every batch row.
///
/// `grid` must be shared or carry exactly `batch` rows.
pub fn evaluate_rows<T, F>(
    model: Approximant,
    grid: &FrequencyGrid<T>,
    batch: usize,
    kernel: F,
) -> Result<Polarizations<T>, WaveformError>
where
    T: Real,
    F: Fn(usize, ArrayView1<'_, T>, ArrayViewMut1<'_, Complex<T>>, ArrayViewMut1<'_, Complex<T>>)
        + Sync,
{
    grid.check_shape(batch)?;
    debug!(
        model = model.display_name(),
        batch,
        n_freq = grid.len(),
        "evaluating waveform"
    );

    let mut out = Polarizations::zeros(batch, grid.len());
    out.plus
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .zip(out.cross.axis_iter_mut(Axis(0)).into_par_iter())
        .enumerate()
        .for_each(|(i, (plus, cross))| kernel(i, grid.row(i), plus, cross));
    Ok(out)
}

/// Validate inputs and evaluate `model`.
///
/// Precessing parameters are required for IMRPhenomPv2 and rejected for the
/// aligned-spin models.
pub fn generate<T: Real>(
    model: Approximant,
    grid: &FrequencyGrid<T>,
    params: &SourceParameters<T>,
    f_ref: T,
) -> Result<Polarizations<T>, WaveformError> {
    let batch = params.validate()?;
    grid.validate(batch)?;
    if !(f_ref.is_finite() && f_ref.value() > 0.0) {
        return Err(WaveformError::invalid(
            "f_ref",
            0,
            format!("must be positive and finite (got {})", f_ref.value()),
        ));
    }

    match (model, params) {
        (Approximant::TaylorF2, SourceParameters::Aligned(b)) => taylorf2::evaluate(grid, b, f_ref),
        (Approximant::ImrPhenomD, SourceParameters::Aligned(b)) => {
            phenom_d::evaluate(grid, b, f_ref)
        }
        (Approximant::ImrPhenomPv2, SourceParameters::Precessing(b)) => {
            phenom_pv2::evaluate(grid, b, f_ref)
        }
        (model, _) => Err(WaveformError::invalid(
            "params",
            0,
            format!(
                "{} expects {} spin parameters",
                model.display_name(),
                if model.is_precessing() { "precessing" } else { "aligned" }
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::domain::{AlignedSpinBatch, AlignedSpinParams};

    fn aligned() -> SourceParameters<f64> {
        SourceParameters::Aligned(AlignedSpinBatch::replicate(
            AlignedSpinParams {
                chirp_mass: 30.0,
                mass_ratio: 0.8,
                chi1: 0.1,
                chi2: -0.1,
                distance: 500.0,
                phase: 0.0,
                inclination: 0.5,
            },
            3,
        ))
    }

    #[test]
    fn rows_receive_their_own_index_and_grid() {
        let grid = FrequencyGrid::PerSample(array![[1.0, 2.0], [3.0, 4.0]]);
        let out = evaluate_rows(Approximant::TaylorF2, &grid, 2, |i, f, mut plus, mut cross| {
            for k in 0..f.len() {
                plus[k] = Complex::new(f[k], i as f64);
                cross[k] = Complex::new(-f[k], 0.0);
            }
        })
        .unwrap();
        assert_eq!(out.plus[[1, 0]], Complex::new(3.0, 1.0));
        assert_eq!(out.plus[[0, 1]], Complex::new(2.0, 0.0));
        assert_eq!(out.cross[[1, 1]], Complex::new(-4.0, 0.0));
    }

    #[test]
    fn per_sample_grid_must_match_batch() {
        let grid = FrequencyGrid::PerSample(array![[1.0, 2.0]]);
        let err = evaluate_rows(Approximant::TaylorF2, &grid, 2, |_, _, _, _| {}).unwrap_err();
        assert!(matches!(err, WaveformError::InvalidFrequencyGrid(_)));
    }

    #[test]
    fn generate_rejects_mismatched_parameter_kind() {
        let grid = FrequencyGrid::uniform(20.0, 30.0, 1.0).unwrap();
        let err = generate(Approximant::ImrPhenomPv2, &grid, &aligned(), 20.0).unwrap_err();
        assert!(err.to_string().contains("precessing"));
    }

    #[test]
    fn generate_rejects_bad_reference_frequency() {
        let grid = FrequencyGrid::uniform(20.0, 30.0, 1.0).unwrap();
        assert!(generate(Approximant::TaylorF2, &grid, &aligned(), 0.0).is_err());
        assert!(generate(Approximant::TaylorF2, &grid, &aligned(), 20.0).is_ok());
    }
}
