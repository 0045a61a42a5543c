//! Source-parameter generation for sanity runs and tests.

pub mod prior;

pub use prior::{DistanceRegime, PriorConfig, PriorSample, sample, sample_aligned, sample_precessing};
