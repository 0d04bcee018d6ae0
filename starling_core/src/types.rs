//! Core domain types for the Starling model.
//!
//! This module defines the values that flow through the model:
//! - Cardiac parameter sets
//! - Full-precision cardiac output results
//! - Display-rounded curve samples

use crate::error::{ensure_finite, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Parameter Sets
// ============================================================================

/// Parameters of the Hill-equation Frank-Starling relationship
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CardiacParams {
    /// EDV (mL) at or below which no blood is ejected
    pub min_edv_for_ejection: f64,
    /// Asymptotic maximum stroke volume (mL)
    pub sv_max: f64,
    /// Effective EDV (mL above `min_edv_for_ejection`) giving half of `sv_max`
    pub km_effective: f64,
    /// Curve steepness (dimensionless)
    pub hill_coefficient: f64,
    /// Beats per minute
    pub heart_rate: f64,
}

impl CardiacParams {
    /// Check that every field is a finite number
    ///
    /// Zero or negative values are representable and pass; only NaN and
    /// infinities are rejected.
    pub fn validate(&self) -> Result<()> {
        ensure_finite("min_edv_for_ejection", self.min_edv_for_ejection)?;
        ensure_finite("sv_max", self.sv_max)?;
        ensure_finite("km_effective", self.km_effective)?;
        ensure_finite("hill_coefficient", self.hill_coefficient)?;
        ensure_finite("heart_rate", self.heart_rate)?;
        Ok(())
    }
}

// ============================================================================
// Evaluation Results
// ============================================================================

/// Cardiac output and stroke volume at a single EDV, at full precision
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CardiacOutput {
    /// Cardiac output (L/min)
    pub co: f64,
    /// Stroke volume (mL/beat)
    pub sv: f64,
}

/// A curve sample rounded for display
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct DataPoint {
    /// End-diastolic volume (mL), 1 decimal
    pub edv: f64,
    /// Stroke volume (mL), 1 decimal
    pub sv: f64,
    /// Cardiac output (L/min), 2 decimals
    pub co: f64,
}

impl DataPoint {
    /// Build a display point from an EDV and its full-precision output
    pub fn from_output(edv: f64, output: CardiacOutput) -> Self {
        Self {
            edv: round_to(edv, 1),
            sv: round_to(output.sv, 1),
            co: round_to(output.co, 2),
        }
    }
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    // Avoid printing "-0.0" for tiny negatives
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
