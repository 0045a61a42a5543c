//! Export evaluated polarizations to CSV.
//!
//! Waveforms: one row per (sample, frequency); easy to load in spreadsheets or
//! numpy. Source parameters: one row per source, with the column names
//! [`crate::io::read_parameters`] accepts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{FrequencyGrid, Polarizations, SourceParameters};
use crate::error::WaveformError;

pub const CSV_HEADER: [&str; 6] = ["sample", "frequency", "plus_re", "plus_im", "cross_re", "cross_im"];

pub fn write_waveform_csv(
    path: &Path,
    grid: &FrequencyGrid<f64>,
    out: &Polarizations<f64>,
) -> Result<(), WaveformError> {
    let file = File::create(path)
        .map_err(|e| WaveformError::io(format!("failed to create export CSV '{}'", path.display()), e))?;
    write_waveform_csv_to(file, grid, out)
}

pub fn write_waveform_csv_to<W: Write>(
    writer: W,
    grid: &FrequencyGrid<f64>,
    out: &Polarizations<f64>,
) -> Result<(), WaveformError> {
    let csv_err = |e: csv::Error| WaveformError::Parse(format!("failed to write export CSV: {e}"));
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(CSV_HEADER).map_err(csv_err)?;

    for i in 0..out.batch_size() {
        let freqs = grid.row(i);
        for (k, f) in freqs.iter().enumerate() {
            let (hp, hc) = (out.plus[[i, k]], out.cross[[i, k]]);
            w.write_record(&[
                i.to_string(),
                format!("{f}"),
                format!("{:e}", hp.re),
                format!("{:e}", hp.im),
                format!("{:e}", hc.re),
                format!("{:e}", hc.im),
            ])
            .map_err(csv_err)?;
        }
    }
    w.flush()
        .map_err(|e| WaveformError::io("failed to flush export CSV", e))
}

/// Write source parameters, one serialized row per batch entry.
pub fn write_parameters_csv_to<W: Write>(
    writer: W,
    params: &SourceParameters<f64>,
) -> Result<(), WaveformError> {
    let csv_err = |e: csv::Error| WaveformError::Parse(format!("failed to write parameter CSV: {e}"));
    let mut w = csv::Writer::from_writer(writer);
    match params {
        SourceParameters::Aligned(b) => {
            for i in 0..b.batch_size()? {
                w.serialize(b.get(i)).map_err(csv_err)?;
            }
        }
        SourceParameters::Precessing(b) => {
            for i in 0..b.batch_size()? {
                w.serialize(b.get(i)).map_err(csv_err)?;
            }
        }
    }
    w.flush()
        .map_err(|e| WaveformError::io("failed to flush parameter CSV", e))
}
