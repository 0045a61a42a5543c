//! Read/write waveform JSON files.
//!
//! A waveform file is the portable record of one evaluated source: the model,
//! its parameters, the frequency axis and both polarizations. The `plot`
//! command re-renders these without re-evaluating the model.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::domain::{
    AlignedSpinParams, Approximant, FrequencyGrid, Polarizations, PrecessingSpinParams,
    SourceParameters,
};
use crate::error::WaveformError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceRecord {
    Aligned(AlignedSpinParams<f64>),
    Precessing(PrecessingSpinParams<f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveformFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub approximant: Approximant,
    pub f_ref: f64,
    pub source: SourceRecord,
    pub frequencies: Vec<f64>,
    /// `[re, im]` pairs.
    pub plus: Vec<Complex<f64>>,
    pub cross: Vec<Complex<f64>>,
}

impl WaveformFile {
    /// Capture batch row `index` of an evaluation.
    pub fn from_row(
        approximant: Approximant,
        f_ref: f64,
        params: &SourceParameters<f64>,
        grid: &FrequencyGrid<f64>,
        out: &Polarizations<f64>,
        index: usize,
    ) -> Result<Self, WaveformError> {
        if index >= out.batch_size() {
            return Err(WaveformError::invalid(
                "sample",
                index,
                format!("batch has {} rows", out.batch_size()),
            ));
        }
        let source = match params {
            SourceParameters::Aligned(b) => SourceRecord::Aligned(b.get(index)),
            SourceParameters::Precessing(b) => SourceRecord::Precessing(b.get(index)),
        };
        Ok(Self {
            tool: env!("CARGO_PKG_NAME").to_string(),
            generated_at: Utc::now(),
            approximant,
            f_ref,
            source,
            frequencies: grid.row(index).to_vec(),
            plus: out.plus.row(index).to_vec(),
            cross: out.cross.row(index).to_vec(),
        })
    }
}

pub fn write_waveform_json(path: &Path, waveform: &WaveformFile) -> Result<(), WaveformError> {
    let file = File::create(path)
        .map_err(|e| WaveformError::io(format!("failed to create waveform JSON '{}'", path.display()), e))?;
    serde_json::to_writer_pretty(file, waveform)
        .map_err(|e| WaveformError::Parse(format!("failed to write waveform JSON: {e}")))
}

pub fn read_waveform_json(path: &Path) -> Result<WaveformFile, WaveformError> {
    let file = File::open(path)
        .map_err(|e| WaveformError::io(format!("failed to open waveform JSON '{}'", path.display()), e))?;
    serde_json::from_reader(file).map_err(|e| WaveformError::Parse(format!("invalid waveform JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::domain::AlignedSpinBatch;

    #[test]
    fn file_survives_a_json_round_trip() {
        let params = SourceParameters::Aligned(AlignedSpinBatch::single(AlignedSpinParams {
            chirp_mass: 30.0,
            mass_ratio: 0.8,
            chi1: 0.0,
            chi2: 0.0,
            distance: 500.0,
            phase: 0.0,
            inclination: 0.0,
        }));
        let grid = FrequencyGrid::Shared(array![20.0, 21.0]);
        let mut out = Polarizations::zeros(1, 2);
        out.cross[[0, 1]] = Complex::new(0.25, -0.5);

        let file = WaveformFile::from_row(Approximant::TaylorF2, 20.0, &params, &grid, &out, 0).unwrap();
        let text = serde_json::to_string(&file).unwrap();
        assert!(text.contains("\"kind\":\"aligned\""));
        let back: WaveformFile = serde_json::from_str(&text).unwrap();
        assert_eq!(back, file);
        assert!(WaveformFile::from_row(Approximant::TaylorF2, 20.0, &params, &grid, &out, 1).is_err());
    }
}
