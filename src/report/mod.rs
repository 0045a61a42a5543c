//! Reporting utilities: per-source summaries of evaluated waveforms.

pub mod format;

pub use format::*;

use crate::domain::{FrequencyGrid, Polarizations, magnitude};

/// Headline numbers for one batch row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSummary {
    pub index: usize,
    pub peak_plus: f64,
    pub peak_cross: f64,
    /// Frequency of the largest `|h+|`.
    pub peak_frequency: f64,
    /// Bins where both polarizations vanish (above a model cutoff).
    pub zero_bins: usize,
    pub non_finite_bins: usize,
}

impl RowSummary {
    pub fn is_finite(&self) -> bool {
        self.non_finite_bins == 0
    }
}

pub fn summarize(grid: &FrequencyGrid<f64>, out: &Polarizations<f64>) -> Vec<RowSummary> {
    (0..out.batch_size())
        .map(|i| {
            let freqs = grid.row(i);
            let (plus, cross) = (out.plus.row(i), out.cross.row(i));
            let mut row = RowSummary {
                index: i,
                peak_plus: 0.0,
                peak_cross: 0.0,
                peak_frequency: f64::NAN,
                zero_bins: 0,
                non_finite_bins: 0,
            };
            for ((f, hp), hc) in freqs.iter().zip(plus.iter()).zip(cross.iter()) {
                let (ap, ac) = (magnitude(hp), magnitude(hc));
                if !(ap.is_finite() && ac.is_finite()) {
                    row.non_finite_bins += 1;
                    continue;
                }
                if ap == 0.0 && ac == 0.0 {
                    row.zero_bins += 1;
                }
                if ap > row.peak_plus {
                    row.peak_plus = ap;
                    row.peak_frequency = *f;
                }
                row.peak_cross = row.peak_cross.max(ac);
            }
            row
        })
        .collect()
}

/// Rows ordered by descending `|h+|` peak, first `top_n`.
pub fn loudest(rows: &[RowSummary], top_n: usize) -> Vec<RowSummary> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| b.peak_plus.partial_cmp(&a.peak_plus).unwrap_or(std::cmp::Ordering::Equal));
    sorted.truncate(top_n);
    sorted
}

#[cfg(test)]
mod tests {
    use ndarray::array;
    use num_complex::Complex;

    use super::*;

    #[test]
    fn summarize_finds_peaks_and_bad_bins() {
        let grid = FrequencyGrid::Shared(array![10.0, 20.0, 30.0]);
        let mut out = Polarizations::zeros(2, 3);
        out.plus[[0, 0]] = Complex::new(3.0, 4.0);
        out.plus[[0, 1]] = Complex::new(1.0, 0.0);
        out.cross[[0, 1]] = Complex::new(0.0, 2.0);
        out.plus[[1, 1]] = Complex::new(f64::NAN, 0.0);

        let rows = summarize(&grid, &out);
        assert_eq!(rows[0].peak_plus, 5.0);
        assert_eq!(rows[0].peak_frequency, 10.0);
        assert_eq!(rows[0].peak_cross, 2.0);
        assert_eq!(rows[0].zero_bins, 1);
        assert!(rows[0].is_finite());
        assert_eq!(rows[1].non_finite_bins, 1);
        assert!(!rows[1].is_finite());

        let top = loudest(&rows, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].index, 0);
    }
}
