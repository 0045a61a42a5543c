//! Top-level application orchestration.
//!
//! `src/main.rs` stays tiny; this module is the real main that:
//! - loads `.env` and sets up logging
//! - parses CLI arguments
//! - runs the generate pipeline or checks reference fixtures
//! - prints reports/plots and writes optional exports

use std::fs::File;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, CompareArgs, GenerateArgs, GridArgs, PlotArgs, SampleArgs};
use crate::domain::{GridConfig, ParamSource, RunConfig};
use crate::error::WaveformError;
use crate::io::{WaveformFile, write_parameters_csv_to, write_waveform_csv, write_waveform_json};
use crate::validation::ReferenceFixture;

pub mod pipeline;

/// Entry point for the `gwf` binary.
pub fn run() -> Result<(), WaveformError> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => handle_generate(&args),
        Command::Sample(args) => handle_sample(&args),
        Command::Plot(args) => handle_plot(&args),
        Command::Compare(args) => handle_compare(&args),
    }
}

/// Logs go to stderr so stdout stays clean for reports and CSV.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Keep an already-installed subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_generate(args: &GenerateArgs) -> Result<(), WaveformError> {
    let config = run_config_from_args(args);
    let run = pipeline::run_generate(&config)?;

    println!(
        "{}",
        crate::report::format_run_summary(&config, &run.grid, &run.summaries, run.elapsed)
    );
    if !run.row_errors.is_empty() {
        println!("Skipped {} parameter row(s); see log for details.\n", run.row_errors.len());
    }
    println!(
        "{}",
        crate::report::format_rows(&crate::report::loudest(&run.summaries, config.top_n))
    );

    let needs_row = config.plot || config.export_json.is_some();
    let row = if needs_row {
        Some(WaveformFile::from_row(
            config.approximant,
            config.f_ref,
            &run.params,
            &run.grid,
            &run.polarizations,
            config.plot_sample,
        )?)
    } else {
        None
    };

    if let (true, Some(w)) = (config.plot, &row) {
        println!(
            "{}",
            crate::plot::render_waveform_file(w, config.plot_width, config.plot_height)
        );
    }

    if let Some(path) = &config.export_csv {
        write_waveform_csv(path, &run.grid, &run.polarizations)?;
        info!(path = %path.display(), "wrote waveform CSV");
    }
    if let (Some(path), Some(w)) = (&config.export_json, &row) {
        write_waveform_json(path, w)?;
        info!(path = %path.display(), "wrote waveform JSON");
    }
    Ok(())
}

fn handle_sample(args: &SampleArgs) -> Result<(), WaveformError> {
    let config = RunConfig {
        approximant: args.approximant,
        source: ParamSource::Prior {
            count: args.prior.count,
            seed: args.prior.seed,
            regime: args.prior.regime,
        },
        grid: grid_config(&args.grid),
        f_ref: args.f_ref,
        strict: false,
        top_n: args.top,
        plot: false,
        plot_width: 0,
        plot_height: 0,
        plot_sample: 0,
        export_csv: None,
        export_json: None,
    };
    let run = pipeline::run_generate(&config)?;

    println!(
        "{}",
        crate::report::format_run_summary(&config, &run.grid, &run.summaries, run.elapsed)
    );
    println!(
        "{}",
        crate::report::format_rows(&crate::report::loudest(&run.summaries, config.top_n))
    );

    if let Some(path) = &args.output {
        let file = File::create(path).map_err(|e| {
            WaveformError::io(format!("failed to create parameter CSV '{}'", path.display()), e)
        })?;
        write_parameters_csv_to(file, &run.params)?;
        info!(path = %path.display(), count = args.prior.count, "wrote prior draw");
    }
    Ok(())
}

fn handle_plot(args: &PlotArgs) -> Result<(), WaveformError> {
    let waveform = crate::io::read_waveform_json(&args.waveform)?;
    println!(
        "{} | source from {}",
        waveform.approximant.display_name(),
        waveform.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "{}",
        crate::plot::render_waveform_file(&waveform, args.width, args.height)
    );
    Ok(())
}

fn handle_compare(args: &CompareArgs) -> Result<(), WaveformError> {
    let mut failed = 0;
    for path in &args.fixtures {
        let fixture = ReferenceFixture::load(path)?;
        let result = fixture.check()?;
        info!(fixture = %path.display(), worst = result.worst(), "compared");
        if !result.passed() {
            failed += 1;
        }
        println!(
            "{:<40} {:<14} worst {:.3e}  tol {:.0e}  {}",
            path.display(),
            fixture.config.approximant.display_name(),
            result.worst(),
            result.tolerance,
            if result.passed() { "ok" } else { "FAIL" }
        );
    }
    if failed > 0 {
        return Err(WaveformError::ReferenceMismatch {
            failed,
            total: args.fixtures.len(),
        });
    }
    Ok(())
}

fn grid_config(args: &GridArgs) -> GridConfig {
    GridConfig {
        f_min: args.f_min,
        f_max: args.f_max,
        delta_f: args.delta_f,
        log_steps: args.log_steps,
    }
}

pub fn run_config_from_args(args: &GenerateArgs) -> RunConfig {
    let source = match &args.params {
        Some(path) => ParamSource::Csv(path.clone()),
        None => ParamSource::Prior {
            count: args.prior.count,
            seed: args.prior.seed,
            regime: args.prior.regime,
        },
    };
    RunConfig {
        approximant: args.approximant,
        source,
        grid: grid_config(&args.grid),
        f_ref: args.f_ref,
        strict: args.strict,
        top_n: args.top,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        plot_sample: args.sample,
        export_csv: args.export_csv.clone(),
        export_json: args.export_json.clone(),
    }
}
