//! `cbc-waveforms` library crate.
//!
//! Frequency-domain gravitational-wave strain for compact binary coalescences:
//! TaylorF2, IMRPhenomD and IMRPhenomPv2, evaluated over batches of sources on
//! a shared or per-source frequency grid.
//!
//! The binary (`gwf`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - models are generic over [`math::Real`], so the same code yields
//!   parameter derivatives through [`math::Dual`]

pub mod app;
pub mod cli;
pub mod constants;
pub mod conversion;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
pub mod validation;
