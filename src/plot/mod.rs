//! Terminal plots.

pub mod ascii;

pub use ascii::{render_waveform_file, render_waveform_plot};
