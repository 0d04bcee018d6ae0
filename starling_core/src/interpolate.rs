//! Interpolation between cardiac regimes.
//!
//! An intensity in `[0, 1]` moves a parameter set from a base regime toward
//! a target regime. The bidirectional form takes an intensity in `[-1, 1]`
//! and picks the target by sign.

use crate::error::ensure_finite;
use crate::{CardiacParams, Result};

fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    start + (end - start) * amount
}

/// Move `base` toward `target` by `intensity`
///
/// - `intensity <= 0` returns `base` unchanged
/// - `intensity >= 1` returns `target` unchanged
/// - otherwise `sv_max`, `km_effective` and `hill_coefficient` are linearly
///   interpolated; `min_edv_for_ejection` and `heart_rate` come from `base`
pub fn interpolate_toward_target(
    base: &CardiacParams,
    target: &CardiacParams,
    intensity: f64,
) -> Result<CardiacParams> {
    ensure_finite("intensity", intensity)?;
    base.validate()?;
    target.validate()?;

    if intensity <= 0.0 {
        return Ok(*base);
    }
    if intensity >= 1.0 {
        return Ok(*target);
    }

    Ok(CardiacParams {
        sv_max: lerp(base.sv_max, target.sv_max, intensity),
        km_effective: lerp(base.km_effective, target.km_effective, intensity),
        hill_coefficient: lerp(base.hill_coefficient, target.hill_coefficient, intensity),
        ..*base
    })
}

/// Interpolate toward `positive_target` for positive intensities and toward
/// `negative_target` for negative ones
///
/// Zero returns `base` exactly. Magnitudes above 1 saturate at the target.
pub fn interpolate_bidirectional(
    base: &CardiacParams,
    positive_target: &CardiacParams,
    negative_target: &CardiacParams,
    intensity: f64,
) -> Result<CardiacParams> {
    ensure_finite("intensity", intensity)?;

    if intensity == 0.0 {
        base.validate()?;
        return Ok(*base);
    }

    let adjusted = if intensity > 0.0 {
        interpolate_toward_target(base, positive_target, intensity)?
    } else {
        interpolate_toward_target(base, negative_target, -intensity)?
    };

    tracing::debug!(
        "Interpolated intensity {:.2}: sv_max {:.1}, km_effective {:.1}",
        intensity,
        adjusted.sv_max,
        adjusted.km_effective
    );

    Ok(adjusted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BASELINE, NEGATIVE_INOTROPY, POSITIVE_INOTROPY};

    #[test]
    fn test_zero_intensity_returns_base() {
        let params =
            interpolate_bidirectional(&BASELINE, &POSITIVE_INOTROPY, &NEGATIVE_INOTROPY, 0.0)
                .unwrap();
        assert_eq!(params, BASELINE);
    }

    #[test]
    fn test_full_intensity_returns_targets() {
        let pos = interpolate_bidirectional(&BASELINE, &POSITIVE_INOTROPY, &NEGATIVE_INOTROPY, 1.0)
            .unwrap();
        assert_eq!(pos, POSITIVE_INOTROPY);

        let neg =
            interpolate_bidirectional(&BASELINE, &POSITIVE_INOTROPY, &NEGATIVE_INOTROPY, -1.0)
                .unwrap();
        assert_eq!(neg, NEGATIVE_INOTROPY);
    }

    #[test]
    fn test_out_of_range_saturates() {
        let pos = interpolate_bidirectional(&BASELINE, &POSITIVE_INOTROPY, &NEGATIVE_INOTROPY, 2.5)
            .unwrap();
        assert_eq!(pos, POSITIVE_INOTROPY);

        let neg =
            interpolate_bidirectional(&BASELINE, &POSITIVE_INOTROPY, &NEGATIVE_INOTROPY, -7.0)
                .unwrap();
        assert_eq!(neg, NEGATIVE_INOTROPY);

        let below = interpolate_toward_target(&BASELINE, &POSITIVE_INOTROPY, -0.3).unwrap();
        assert_eq!(below, BASELINE);
    }

    #[test]
    fn test_midpoint() {
        let mid = interpolate_toward_target(&BASELINE, &POSITIVE_INOTROPY, 0.5).unwrap();
        assert_eq!(mid.sv_max, (BASELINE.sv_max + POSITIVE_INOTROPY.sv_max) / 2.0);
        assert_eq!(
            mid.km_effective,
            (BASELINE.km_effective + POSITIVE_INOTROPY.km_effective) / 2.0
        );
        assert_eq!(mid.heart_rate, BASELINE.heart_rate);
        assert_eq!(mid.min_edv_for_ejection, BASELINE.min_edv_for_ejection);
    }

    #[test]
    fn test_negative_direction_uses_magnitude() {
        let params =
            interpolate_bidirectional(&BASELINE, &POSITIVE_INOTROPY, &NEGATIVE_INOTROPY, -0.5)
                .unwrap();
        assert_eq!(params.sv_max, 165.0);
        assert_eq!(params.km_effective, 100.0);
    }

    #[test]
    fn test_heart_rate_copied_from_base() {
        let target = CardiacParams {
            heart_rate: 120.0,
            hill_coefficient: 4.0,
            ..POSITIVE_INOTROPY
        };
        let params = interpolate_toward_target(&BASELINE, &target, 0.25).unwrap();
        assert_eq!(params.heart_rate, 72.0);
        assert!((params.hill_coefficient - 3.1).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite_intensity_rejected() {
        let result =
            interpolate_bidirectional(&BASELINE, &POSITIVE_INOTROPY, &NEGATIVE_INOTROPY, f64::NAN);
        assert!(matches!(result, Err(crate::Error::InvalidInput(_))));

        let result = interpolate_toward_target(&BASELINE, &POSITIVE_INOTROPY, f64::INFINITY);
        assert!(matches!(result, Err(crate::Error::InvalidInput(_))));
    }
}
