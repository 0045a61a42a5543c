//! Formatted terminal output.
//!
//! Formatting lives here so the model and engine code stays free of it.

use std::time::Duration;

use crate::domain::{FrequencyGrid, RunConfig};
use crate::report::RowSummary;

/// Run header: model, grid and batch shape, timing, finiteness.
pub fn format_run_summary(
    config: &RunConfig,
    grid: &FrequencyGrid<f64>,
    rows: &[RowSummary],
    elapsed: Duration,
) -> String {
    let mut out = String::new();

    out.push_str("=== gwf - CBC frequency-domain waveforms ===\n");
    out.push_str(&format!("Model: {}\n", config.approximant.display_name()));
    let spacing = match config.grid.log_steps {
        Some(n) => format!("{n} log-spaced points"),
        None => format!("df={} Hz", config.grid.delta_f),
    };
    out.push_str(&format!(
        "Grid: f=[{}, {}] Hz | {spacing} | n={}\n",
        config.grid.f_min,
        config.grid.f_max,
        grid.len()
    ));
    out.push_str(&format!("f_ref: {} Hz\n", config.f_ref));

    let bad = rows.iter().filter(|r| !r.is_finite()).count();
    out.push_str(&format!(
        "Batch: n={} | evaluated in {:.3} ms | non-finite rows: {bad}\n",
        rows.len(),
        elapsed.as_secs_f64() * 1e3,
    ));
    out
}

/// Table of per-row summaries.
pub fn format_rows(rows: &[RowSummary]) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:>6} {:>12} {:>12} {:>10} {:>6} {:>6}\n",
            "sample", "peak|h+|", "peak|hx|", "f_peak", "zeros", "bad"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<6} {:-<12} {:-<12} {:-<10} {:-<6} {:-<6}", "", "", "", "", "", "").trim_end());
    out.push('\n');

    for r in rows {
        out.push_str(
            format!(
                "{:>6} {:>12.4e} {:>12.4e} {:>10.2} {:>6} {:>6}",
                r.index, r.peak_plus, r.peak_cross, r.peak_frequency, r.zero_bins, r.non_finite_bins
            )
            .trim_end(),
        );
        out.push('\n');
    }
    out
}
