//! Frank-Starling curve sampling.

use crate::error::ensure_finite;
use crate::{cardiac_output, CardiacParams, DataPoint, Error, Result};

/// Largest accepted step count
pub const MAX_CURVE_STEPS: usize = 1_000_000;

/// Sample the curve for `params` over `[min_edv, max_edv]`
///
/// The range is split into `steps` equal intervals, giving `steps + 1`
/// points with both endpoints included. Evaluation runs at full precision;
/// each returned point is rounded for display.
///
/// Reversed bounds are accepted and produce a descending sequence. `steps`
/// must be between 1 and [`MAX_CURVE_STEPS`].
pub fn generate_curve(
    params: &CardiacParams,
    min_edv: f64,
    max_edv: f64,
    steps: usize,
) -> Result<Vec<DataPoint>> {
    if steps == 0 {
        return Err(Error::InvalidArgument(
            "curve needs at least one step".into(),
        ));
    }
    if steps > MAX_CURVE_STEPS {
        return Err(Error::InvalidArgument(format!(
            "curve steps must not exceed {}, got {}",
            MAX_CURVE_STEPS, steps
        )));
    }
    ensure_finite("min_edv", min_edv)?;
    ensure_finite("max_edv", max_edv)?;
    params.validate()?;

    if min_edv > max_edv {
        tracing::debug!(
            "Reversed EDV range {} > {}, sampling in descending order",
            min_edv,
            max_edv
        );
    }

    let step_size = (max_edv - min_edv) / steps as f64;
    let mut data = Vec::with_capacity(steps + 1);

    for i in 0..=steps {
        let edv = min_edv + i as f64 * step_size;
        let output = cardiac_output(edv, params)?;
        data.push(DataPoint::from_output(edv, output));
    }

    tracing::debug!(
        "Generated {} curve points over [{}, {}]",
        data.len(),
        min_edv,
        max_edv
    );

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BASELINE, POSITIVE_INOTROPY};

    #[test]
    fn test_default_range_shape() {
        crate::logging::init_test();

        let curve = generate_curve(&BASELINE, 50.0, 280.0, 100).unwrap();
        assert_eq!(curve.len(), 101);
        assert_eq!(curve[0].edv, 50.0);
        assert_eq!(curve[100].edv, 280.0);
        assert!(curve.windows(2).all(|w| w[1].edv > w[0].edv));
        assert!(curve.windows(2).all(|w| w[1].sv >= w[0].sv));

        // Threshold point ejects nothing
        assert_eq!(curve[0].sv, 0.0);
        assert_eq!(curve[0].co, 0.0);
    }

    #[test]
    fn test_points_are_rounded() {
        let curve = generate_curve(&POSITIVE_INOTROPY, 50.0, 280.0, 100).unwrap();
        for point in &curve {
            assert_eq!(point.edv, (point.edv * 10.0).round() / 10.0);
            assert_eq!(point.sv, (point.sv * 10.0).round() / 10.0);
            assert_eq!(point.co, (point.co * 100.0).round() / 100.0);
        }
    }

    #[test]
    fn test_single_step() {
        let curve = generate_curve(&BASELINE, 50.0, 140.0, 1).unwrap();
        assert_eq!(curve.len(), 2);
        assert_eq!(curve[1].sv, 90.0);
        assert_eq!(curve[1].co, 6.48);
    }

    #[test]
    fn test_zero_steps_rejected() {
        let result = generate_curve(&BASELINE, 50.0, 280.0, 0);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_excessive_steps_rejected() {
        for steps in [usize::MAX, usize::MAX / 4, MAX_CURVE_STEPS + 1] {
            let result = generate_curve(&BASELINE, 50.0, 280.0, steps);
            assert!(matches!(result, Err(Error::InvalidArgument(_))), "{}", steps);
        }
    }

    #[test]
    fn test_non_finite_bounds_rejected() {
        let result = generate_curve(&BASELINE, f64::NEG_INFINITY, 280.0, 10);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_reversed_range_descends() {
        let curve = generate_curve(&BASELINE, 280.0, 50.0, 10).unwrap();
        assert_eq!(curve.len(), 11);
        assert_eq!(curve[0].edv, 280.0);
        assert_eq!(curve[10].edv, 50.0);
        assert!(curve.windows(2).all(|w| w[1].edv < w[0].edv));
    }

    #[test]
    fn test_deterministic() {
        let a = generate_curve(&BASELINE, 50.0, 280.0, 37).unwrap();
        let b = generate_curve(&BASELINE, 50.0, 280.0, 37).unwrap();
        assert_eq!(a, b);
    }
}
