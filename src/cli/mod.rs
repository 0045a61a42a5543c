//! Command-line parsing for the `gwf` waveform generator.
//!
//! Argument parsing and dispatch stay separate from the model code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::data::DistanceRegime;
use crate::domain::Approximant;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "gwf", version, about = "Frequency-domain CBC waveform generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a model for a batch of sources, print a summary and optionally plot/export.
    Generate(GenerateArgs),
    /// Draw a seeded batch from the validation prior, evaluate it and report
    /// finiteness and peak statistics.
    Sample(SampleArgs),
    /// Plot a previously exported waveform JSON.
    Plot(PlotArgs),
    /// Check the models against recorded reference fixtures.
    Compare(CompareArgs),
}

/// Frequency axis options.
#[derive(Debug, Args, Clone)]
pub struct GridArgs {
    /// Lowest frequency (Hz).
    #[arg(long, default_value_t = 20.0)]
    pub f_min: f64,

    /// Highest frequency (Hz).
    #[arg(long, default_value_t = 1024.0)]
    pub f_max: f64,

    /// Uniform frequency step (Hz).
    #[arg(long, default_value_t = 0.25)]
    pub delta_f: f64,

    /// Use N log-spaced frequencies instead of a uniform step.
    #[arg(long, value_name = "N")]
    pub log_steps: Option<usize>,
}

/// Prior draw options, shared by `generate` and `sample`.
#[derive(Debug, Args, Clone)]
pub struct PriorArgs {
    /// Number of sources to draw.
    #[arg(short = 'n', long, default_value_t = 16)]
    pub count: usize,

    /// Random seed for the prior draw.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Distance regime (far: 400-3000 Mpc, close: 100-400 Mpc).
    #[arg(long, value_enum, default_value_t = DistanceRegime::Far)]
    pub regime: DistanceRegime,
}

#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// Waveform model.
    #[arg(short = 'a', long, value_enum, default_value_t = Approximant::ImrPhenomD)]
    pub approximant: Approximant,

    /// Source parameter CSV; when absent, sources are drawn from the prior.
    #[arg(long, value_name = "CSV")]
    pub params: Option<PathBuf>,

    #[command(flatten)]
    pub prior: PriorArgs,

    #[command(flatten)]
    pub grid: GridArgs,

    /// Reference frequency (Hz).
    #[arg(long, default_value_t = 20.0)]
    pub f_ref: f64,

    /// Fail when any output bin is non-finite.
    #[arg(long)]
    pub strict: bool,

    /// Show the N loudest sources.
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Render an ASCII amplitude plot (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Batch row to plot and export as JSON.
    #[arg(long, default_value_t = 0)]
    pub sample: usize,

    /// Export every row's polarizations to CSV.
    #[arg(long, value_name = "CSV")]
    pub export_csv: Option<PathBuf>,

    /// Export the `--sample` row to waveform JSON.
    #[arg(long, value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct SampleArgs {
    #[command(flatten)]
    pub prior: PriorArgs,

    /// Waveform model (IMRPhenomPv2 draws precessing spins).
    #[arg(short = 'a', long, value_enum, default_value_t = Approximant::ImrPhenomD)]
    pub approximant: Approximant,

    #[command(flatten)]
    pub grid: GridArgs,

    /// Reference frequency (Hz).
    #[arg(long, default_value_t = 20.0)]
    pub f_ref: f64,

    /// Show the N loudest sources.
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Also write the drawn parameters to CSV.
    #[arg(short = 'o', long, value_name = "CSV")]
    pub output: Option<PathBuf>,
}

/// Options for plotting a saved waveform.
#[derive(Debug, Args)]
pub struct PlotArgs {
    /// Waveform JSON produced by `gwf generate --export-json`.
    #[arg(long, value_name = "JSON")]
    pub waveform: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

/// Options for checking recorded reference fixtures.
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Reference fixture JSON files.
    #[arg(required = true, value_name = "JSON")]
    pub fixtures: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_defaults_and_flags() {
        let cli = Cli::try_parse_from([
            "gwf",
            "generate",
            "-a",
            "phenompv2",
            "--log-steps",
            "64",
            "--no-plot",
            "--regime",
            "close",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.approximant, Approximant::ImrPhenomPv2);
        assert_eq!(args.grid.log_steps, Some(64));
        assert_eq!(args.prior.regime, DistanceRegime::Close);
        assert!(args.no_plot);
        assert_eq!(args.f_ref, 20.0);
        assert!(args.params.is_none());
    }

    #[test]
    fn sample_takes_prior_and_grid_flags() {
        let cli = Cli::try_parse_from(["gwf", "sample", "-n", "4", "--seed", "1", "-o", "draw.csv"])
            .unwrap();
        let Command::Sample(args) = cli.command else {
            panic!("expected sample");
        };
        assert_eq!(args.prior.count, 4);
        assert_eq!(args.prior.seed, 1);
        assert_eq!(args.grid.f_min, 20.0);
        assert_eq!(args.output, Some(PathBuf::from("draw.csv")));
    }

    #[test]
    fn plot_requires_a_waveform() {
        assert!(Cli::try_parse_from(["gwf", "plot"]).is_err());
    }

    #[test]
    fn compare_needs_at_least_one_fixture() {
        assert!(Cli::try_parse_from(["gwf", "compare"]).is_err());
        let cli = Cli::try_parse_from(["gwf", "compare", "a.json", "b.json"]).unwrap();
        let Command::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.fixtures.len(), 2);
    }
}
