//! Shared generate pipeline: parameters -> grid -> batched evaluation -> summaries.
//!
//! The CLI focuses on presentation; this module does the work and is what the
//! integration tests drive.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::data::{PriorConfig, PriorSample, sample};
use crate::domain::{FrequencyGrid, ParamSource, Polarizations, RunConfig, SourceParameters};
use crate::error::WaveformError;
use crate::io::{RowError, load_parameters};
use crate::report::{RowSummary, summarize};

/// All computed outputs of a single `gwf generate` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub params: SourceParameters<f64>,
    pub grid: FrequencyGrid<f64>,
    pub polarizations: Polarizations<f64>,
    pub summaries: Vec<RowSummary>,
    /// CSV rows that were skipped during ingest.
    pub row_errors: Vec<RowError>,
    pub elapsed: Duration,
}

/// Resolve the configured parameter source into a batch.
pub fn load_source(config: &RunConfig) -> Result<(SourceParameters<f64>, Vec<RowError>), WaveformError> {
    let precessing = config.approximant.is_precessing();
    match &config.source {
        ParamSource::Csv(path) => {
            let ingested = load_parameters(path, precessing)?;
            info!(
                path = %path.display(),
                rows_read = ingested.rows_read,
                rows_used = ingested.rows_used,
                "loaded source parameters"
            );
            for e in &ingested.row_errors {
                warn!(line = e.line, "skipped row: {}", e.message);
            }
            Ok((ingested.params, ingested.row_errors))
        }
        ParamSource::Prior { count, seed, regime } => {
            let prior = PriorConfig {
                count: *count,
                seed: *seed,
                regime: *regime,
                f_ref: config.f_ref,
            };
            info!(count, seed, ?regime, "drawing sources from prior");
            let params = match sample(&prior, precessing)? {
                PriorSample::Aligned(b) => SourceParameters::Aligned(b),
                PriorSample::Precessing(b) => SourceParameters::Precessing(b),
            };
            Ok((params, Vec::new()))
        }
    }
}

/// Execute the full pipeline and return the computed outputs.
pub fn run_generate(config: &RunConfig) -> Result<RunOutput, WaveformError> {
    let (params, row_errors) = load_source(config)?;
    let grid = config.grid.build()?;

    let started = Instant::now();
    let polarizations = crate::engine::generate(config.approximant, &grid, &params, config.f_ref)?;
    let elapsed = started.elapsed();
    info!(
        model = config.approximant.display_name(),
        batch = polarizations.batch_size(),
        n_freq = grid.len(),
        elapsed_ms = elapsed.as_secs_f64() * 1e3,
        "waveforms evaluated"
    );

    if config.strict {
        polarizations.ensure_finite()?;
    }
    let summaries = summarize(&grid, &polarizations);
    let bad = summaries.iter().filter(|r| !r.is_finite()).count();
    if bad > 0 {
        warn!(rows = bad, "non-finite output");
    }

    Ok(RunOutput {
        params,
        grid,
        polarizations,
        summaries,
        row_errors,
        elapsed,
    })
}
