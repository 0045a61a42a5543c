//! Run configuration assembled from CLI flags.

use std::path::PathBuf;

use crate::data::DistanceRegime;
use crate::domain::{Approximant, FrequencyGrid};
use crate::error::WaveformError;

/// How to lay out the frequency axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub f_min: f64,
    pub f_max: f64,
    pub delta_f: f64,
    /// Use this many log-spaced points instead of a uniform `delta_f` step.
    pub log_steps: Option<usize>,
}

impl GridConfig {
    pub fn build(&self) -> Result<FrequencyGrid<f64>, WaveformError> {
        match self.log_steps {
            Some(steps) => FrequencyGrid::log_spaced(self.f_min, self.f_max, steps),
            None => FrequencyGrid::uniform(self.f_min, self.f_max, self.delta_f),
        }
    }
}

/// Where the source parameters come from.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamSource {
    Csv(PathBuf),
    /// Drawn from the validation prior.
    Prior {
        count: usize,
        seed: u64,
        regime: DistanceRegime,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub approximant: Approximant,
    pub source: ParamSource,
    pub grid: GridConfig,
    pub f_ref: f64,
    /// Fail on non-finite output instead of reporting it.
    pub strict: bool,
    pub top_n: usize,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    /// Batch row used for the plot and the JSON export.
    pub plot_sample: usize,
    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_config_picks_spacing() {
        let uniform = GridConfig {
            f_min: 10.0,
            f_max: 20.0,
            delta_f: 2.5,
            log_steps: None,
        };
        assert_eq!(uniform.build().unwrap().len(), 5);
        let log = GridConfig {
            log_steps: Some(3),
            ..uniform
        };
        let FrequencyGrid::Shared(f) = log.build().unwrap() else {
            panic!("expected shared grid");
        };
        assert!((f[1] - 200f64.sqrt()).abs() < 1e-9);
    }
}
