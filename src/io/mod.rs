//! Input/output helpers.
//!
//! - parameter CSV ingest + validation (`ingest`)
//! - waveform CSV export (`export`)
//! - waveform JSON read/write (`waveform`)

pub mod export;
pub mod ingest;
pub mod waveform;

pub use export::*;
pub use ingest::*;
pub use waveform::*;
