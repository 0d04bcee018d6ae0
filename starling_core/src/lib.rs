#![forbid(unsafe_code)]

//! Core model and business logic for the Starling cardiac output simulator.
//!
//! This crate provides:
//! - Cardiac parameter sets and the built-in regime presets
//! - Bidirectional interpolation between regimes
//! - Hill-equation stroke volume and cardiac output
//! - Frank-Starling curve sampling
//! - Simulation snapshots and report export

pub mod types;
pub mod error;
pub mod presets;
pub mod config;
pub mod logging;
pub mod interpolate;
pub mod hemodynamics;
pub mod curve;
pub mod simulation;
pub mod report;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use presets::{
    BASELINE, DECREASED_AFTERLOAD, INCREASED_AFTERLOAD, NEGATIVE_INOTROPY, POSITIVE_INOTROPY,
};
pub use config::Config;
pub use interpolate::{interpolate_bidirectional, interpolate_toward_target};
pub use hemodynamics::{cardiac_output, stroke_volume};
pub use curve::generate_curve;
pub use simulation::simulate;
pub use report::SimulationReport;
