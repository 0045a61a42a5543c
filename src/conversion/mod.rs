//! Parameter conversions used ahead of the waveform models.
//!
//! - chirp mass / mass ratio ↔ component masses (`masses`)
//! - source-frame precessing spin angles → Cartesian spins (`spins`)
//! - elementary rotations shared with the precessing model (`rotation`)

pub mod masses;
pub mod rotation;
pub mod spins;

pub use masses::*;
pub use spins::*;
