//! Hill-equation stroke volume and cardiac output.
//!
//! Stroke volume rises sigmoidally with effective filling volume
//! (EDV above the ejection threshold):
//!
//! ```text
//! sv = sv_max * x^h / (km^h + x^h),   x = edv - min_edv_for_ejection
//! ```
//!
//! Physiologically invalid fillings degrade to zero instead of failing.

use crate::error::ensure_finite;
use crate::{CardiacOutput, CardiacParams, Error, Result};

/// Stroke volume (mL) ejected at `edv` (mL)
///
/// Returns 0 at or below `min_edv_for_ejection` and when the Hill
/// denominator is exactly zero. Saturates at `sv_max` when the filling term
/// overflows.
pub fn stroke_volume(edv: f64, params: &CardiacParams) -> Result<f64> {
    ensure_finite("edv", edv)?;
    params.validate()?;

    if edv <= params.min_edv_for_ejection {
        return Ok(0.0);
    }
    let effective_edv = edv - params.min_edv_for_ejection;
    if effective_edv <= 0.0 {
        return Ok(0.0);
    }

    let numerator = effective_edv.powf(params.hill_coefficient);
    let denominator = params.km_effective.powf(params.hill_coefficient) + numerator;

    if denominator == 0.0 {
        return Ok(0.0);
    }
    if numerator.is_infinite() && denominator.is_infinite() {
        return Ok(params.sv_max);
    }

    let sv = params.sv_max * (numerator / denominator);
    if !sv.is_finite() {
        return Err(Error::InvalidInput(format!(
            "stroke volume undefined at edv {} (km_effective {}, hill_coefficient {})",
            edv, params.km_effective, params.hill_coefficient
        )));
    }
    Ok(sv)
}

/// Cardiac output (L/min) and stroke volume (mL) at `edv`
pub fn cardiac_output(edv: f64, params: &CardiacParams) -> Result<CardiacOutput> {
    let sv = stroke_volume(edv, params)?;
    let co = (sv * params.heart_rate) / 1000.0;
    Ok(CardiacOutput { co, sv })
}
