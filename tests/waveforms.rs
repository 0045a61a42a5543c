//! Cross-model properties, exercised through the public library API.

use std::path::PathBuf;

use cbc_waveforms::app::pipeline::run_generate;
use cbc_waveforms::data::{DistanceRegime, PriorConfig, sample_aligned, sample_precessing};
use cbc_waveforms::domain::{
    AlignedSpinBatch, AlignedSpinParams, Approximant, FrequencyGrid, GridConfig, ParamSource,
    PrecessingSpinBatch, PrecessingSpinParams, RunConfig, SourceParameters, magnitude,
};
use cbc_waveforms::engine::generate;

fn prior(count: usize) -> PriorConfig {
    PriorConfig {
        count,
        seed: 2024,
        regime: DistanceRegime::Far,
        f_ref: 20.0,
    }
}

fn light_source() -> AlignedSpinParams<f64> {
    AlignedSpinParams {
        chirp_mass: 10.0,
        mass_ratio: 0.9,
        chi1: 0.0,
        chi2: 0.0,
        distance: 400.0,
        phase: 0.0,
        inclination: 0.0,
    }
}

#[test]
fn taylorf2_and_phenom_d_amplitudes_agree_early_in_the_inspiral() {
    let grid = FrequencyGrid::uniform(15.0, 25.0, 1.0).unwrap();
    let params = SourceParameters::Aligned(AlignedSpinBatch::single(light_source()));
    let f2 = generate(Approximant::TaylorF2, &grid, &params, 20.0).unwrap();
    let d = generate(Approximant::ImrPhenomD, &grid, &params, 20.0).unwrap();

    for (a, b) in f2.plus.iter().zip(d.plus.iter()) {
        let (a, b) = (magnitude(a), magnitude(b));
        assert!((a / b - 1.0).abs() < 0.1, "TaylorF2 {a} vs IMRPhenomD {b}");
    }
}

#[test]
fn pv2_without_in_plane_spin_matches_phenom_d() {
    let grid = FrequencyGrid::uniform(20.0, 512.0, 4.0).unwrap();
    let p = AlignedSpinParams {
        chi1: 0.4,
        chi2: -0.2,
        inclination: 0.7,
        ..light_source()
    };
    let twisted = PrecessingSpinParams {
        chirp_mass: p.chirp_mass,
        mass_ratio: p.mass_ratio,
        chi1x: 0.0,
        chi1y: 0.0,
        chi1z: p.chi1,
        chi2x: 0.0,
        chi2y: 0.0,
        chi2z: p.chi2,
        distance: p.distance,
        tc: 0.0,
        phase: p.phase,
        inclination: p.inclination,
    };
    let d = generate(
        Approximant::ImrPhenomD,
        &grid,
        &SourceParameters::Aligned(AlignedSpinBatch::single(p)),
        20.0,
    )
    .unwrap();
    let pv2 = generate(
        Approximant::ImrPhenomPv2,
        &grid,
        &SourceParameters::Precessing(PrecessingSpinBatch::single(twisted)),
        20.0,
    )
    .unwrap();

    for (a, b) in pv2.plus.iter().zip(d.plus.iter()).chain(pv2.cross.iter().zip(d.cross.iter())) {
        let (a, b) = (magnitude(a), magnitude(b));
        assert!((a - b).abs() <= 1e-9 * b, "{a} vs {b}");
    }

    // Residual phase is `a + b f`: zero second difference on the uniform grid.
    for pol in [(&pv2.plus, &d.plus), (&pv2.cross, &d.cross)] {
        let ratio: Vec<_> = pol.0.iter().zip(pol.1.iter()).map(|(a, b)| a / b).collect();
        for w in ratio.windows(3) {
            let curvature = (w[2] * w[0] / (w[1] * w[1])).arg();
            assert!(curvature.abs() < 1e-6, "curvature={curvature}");
        }
    }
}

#[test]
fn inverted_mass_ratio_with_swapped_spins_is_the_same_source() {
    let grid = FrequencyGrid::uniform(20.0, 300.0, 2.0).unwrap();
    let p = AlignedSpinParams {
        chirp_mass: 30.0,
        mass_ratio: 0.8,
        chi1: 0.1,
        chi2: -0.1,
        distance: 500.0,
        phase: 0.0,
        inclination: 0.5,
    };
    let flipped = AlignedSpinParams {
        mass_ratio: 1.0 / p.mass_ratio,
        chi1: p.chi2,
        chi2: p.chi1,
        ..p
    };

    for model in [Approximant::TaylorF2, Approximant::ImrPhenomD] {
        let run = |q: AlignedSpinParams<f64>| {
            generate(model, &grid, &SourceParameters::Aligned(AlignedSpinBatch::single(q)), 20.0)
                .unwrap()
        };
        let (a, b) = (run(p), run(flipped));
        for (x, y) in a.plus.iter().zip(b.plus.iter()).chain(a.cross.iter().zip(b.cross.iter())) {
            let scale = magnitude(x).max(1e-30);
            assert!(magnitude(&(x - y)) <= 1e-9 * scale, "{}", model.display_name());
        }
    }

    let twisted = |q: AlignedSpinParams<f64>| PrecessingSpinParams {
        chirp_mass: q.chirp_mass,
        mass_ratio: q.mass_ratio,
        chi1x: 0.0,
        chi1y: 0.0,
        chi1z: q.chi1,
        chi2x: 0.0,
        chi2y: 0.0,
        chi2z: q.chi2,
        distance: q.distance,
        tc: 0.0,
        phase: q.phase,
        inclination: q.inclination,
    };
    let run = |q| {
        generate(
            Approximant::ImrPhenomPv2,
            &grid,
            &SourceParameters::Precessing(PrecessingSpinBatch::single(twisted(q))),
            20.0,
        )
        .unwrap()
    };
    let (a, b) = (run(p), run(flipped));
    for (x, y) in a.plus.iter().zip(b.plus.iter()) {
        assert!(magnitude(&(x - y)) <= 1e-9 * magnitude(x).max(1e-30));
    }
}

#[test]
fn prior_draws_are_finite_for_every_model() {
    let grid = FrequencyGrid::log_spaced(10.0, 1024.0, 96).unwrap();
    let aligned = SourceParameters::Aligned(sample_aligned(&prior(12)).unwrap());
    let precessing = SourceParameters::Precessing(sample_precessing(&prior(12)).unwrap());

    for (model, params) in [
        (Approximant::TaylorF2, &aligned),
        (Approximant::ImrPhenomD, &aligned),
        (Approximant::ImrPhenomPv2, &precessing),
    ] {
        let out = generate(model, &grid, params, 20.0).unwrap();
        assert_eq!(out.batch_size(), 12);
        out.ensure_finite()
            .unwrap_or_else(|e| panic!("{}: {e}", model.display_name()));
    }
}

#[test]
fn batch_rows_match_single_source_evaluation() {
    let grid = FrequencyGrid::uniform(20.0, 300.0, 7.0).unwrap();
    let batch = sample_precessing(&prior(3)).unwrap();
    let all = generate(
        Approximant::ImrPhenomPv2,
        &grid,
        &SourceParameters::Precessing(batch.clone()),
        20.0,
    )
    .unwrap();

    for i in 0..3 {
        let one = generate(
            Approximant::ImrPhenomPv2,
            &grid,
            &SourceParameters::Precessing(PrecessingSpinBatch::single(batch.get(i))),
            20.0,
        )
        .unwrap();
        assert_eq!(one.plus.row(0), all.plus.row(i));
        assert_eq!(one.cross.row(0), all.cross.row(i));
    }
}

#[test]
fn model_and_parameter_family_must_match() {
    let grid = FrequencyGrid::uniform(20.0, 40.0, 10.0).unwrap();
    let params = SourceParameters::Aligned(AlignedSpinBatch::single(light_source()));
    let err = generate(Approximant::ImrPhenomPv2, &grid, &params, 20.0).unwrap_err();
    assert!(err.to_string().contains("precessing"), "{err}");
}

fn temp_csv(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("{name}-{}.csv", std::process::id()));
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn csv_pipeline_skips_bad_rows_and_summarizes_the_rest() {
    let path = temp_csv(
        "gwf-pipeline",
        "chirp_mass,mass_ratio,chi1,chi2,distance,inclination\n\
         12,0.7,0.2,0.1,300,0.3\n\
         12,0.7,1.4,0.1,300,0.3\n\
         40,0.5,-0.3,0.0,1500,1.2\n",
    );
    let config = RunConfig {
        approximant: Approximant::ImrPhenomD,
        source: ParamSource::Csv(path.clone()),
        grid: GridConfig {
            f_min: 20.0,
            f_max: 512.0,
            delta_f: 0.5,
            log_steps: None,
        },
        f_ref: 20.0,
        strict: true,
        top_n: 5,
        plot: false,
        plot_width: 80,
        plot_height: 20,
        plot_sample: 0,
        export_csv: None,
        export_json: None,
    };
    let run = run_generate(&config).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(run.polarizations.batch_size(), 2);
    assert_eq!(run.row_errors.len(), 1);
    assert_eq!(run.row_errors[0].line, 3);
    assert_eq!(run.summaries.len(), 2);
    assert!(run.summaries.iter().all(|s| s.is_finite()));
    // The nearer, lighter source is louder at its peak.
    assert!(run.summaries[0].peak_plus > run.summaries[1].peak_plus);
}

#[test]
fn prior_pipeline_is_reproducible() {
    let config = RunConfig {
        approximant: Approximant::TaylorF2,
        source: ParamSource::Prior {
            count: 4,
            seed: 9,
            regime: DistanceRegime::Close,
        },
        grid: GridConfig {
            f_min: 20.0,
            f_max: 200.0,
            delta_f: 1.0,
            log_steps: Some(50),
        },
        f_ref: 20.0,
        strict: true,
        top_n: 2,
        plot: false,
        plot_width: 80,
        plot_height: 20,
        plot_sample: 0,
        export_csv: None,
        export_json: None,
    };
    let a = run_generate(&config).unwrap();
    let b = run_generate(&config).unwrap();
    assert_eq!(a.polarizations, b.polarizations);
    assert_eq!(a.grid.len(), 50);
}
