//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the closed model set (`Approximant`) and tagged parameters (`SourceParameters`)
//! - batched parameter storage with broadcasting (`AlignedSpinBatch`, `PrecessingSpinBatch`)
//! - frequency grids and output polarizations (`FrequencyGrid`, `Polarizations`)
//! - run configuration for the binary (`RunConfig`)

pub mod config;
pub mod types;

pub use config::*;
pub use types::*;
