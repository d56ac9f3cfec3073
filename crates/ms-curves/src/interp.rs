//! Piecewise-linear lookup over non-uniform breakpoints.

use crate::common::{check_finite, check_strictly_increasing};
use crate::error::{CurveError, CurveResult};

/// Linearly interpolate `values` at `x` over strictly increasing `breakpoints`.
///
/// Outside the breakpoint range the lookup is flat: at or below the first
/// breakpoint the first value is returned, at or above the last breakpoint the
/// last value. A lookup exactly on a breakpoint returns that breakpoint's value
/// unchanged.
///
/// # Errors
/// Returns [`CurveError::MalformedCurve`] when the sequences are empty or of
/// different lengths, when any breakpoint fails to strictly increase on its
/// predecessor, or when a value the lookup touches is non-finite.
pub fn interpolate(x: f64, breakpoints: &[f64], values: &[f64]) -> CurveResult<f64> {
    let n = breakpoints.len();
    if n == 0 {
        return Err(CurveError::MalformedCurve {
            what: "empty breakpoint sequence",
            index: 0,
        });
    }
    if values.len() != n {
        return Err(CurveError::MalformedCurve {
            what: "value count differs from breakpoint count",
            index: values.len().min(n),
        });
    }
    if x.is_nan() {
        return Err(CurveError::InvalidArg {
            what: "lookup speed is NaN",
        });
    }
    check_strictly_increasing(breakpoints)?;

    if x <= breakpoints[0] {
        return check_finite(values[0], "curve value", 0);
    }
    if x >= breakpoints[n - 1] {
        return check_finite(values[n - 1], "curve value", n - 1);
    }

    // First breakpoint >= x; 1 <= i <= n-1 given the guards above.
    let i = breakpoints.partition_point(|&b| b < x);
    let y1 = check_finite(values[i], "curve value", i)?;
    if breakpoints[i] == x {
        return Ok(y1);
    }
    let y0 = check_finite(values[i - 1], "curve value", i - 1)?;

    let (x0, x1) = (breakpoints[i - 1], breakpoints[i]);
    let span = x1 - x0;

    Ok(y0 + (x - x0) * (y1 - y0) / span)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::breakpoints::SPEED_BREAKPOINTS;
    use proptest::prelude::*;

    fn table() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(0.0_f64..800.0_f64, SPEED_BREAKPOINTS.len())
    }

    proptest! {
        #[test]
        fn flat_extrapolation(ys in table(), below in -500.0_f64..=0.0, above in 100.0_f64..500.0) {
            prop_assert_eq!(interpolate(below, &SPEED_BREAKPOINTS, &ys).unwrap(), ys[0]);
            prop_assert_eq!(
                interpolate(above, &SPEED_BREAKPOINTS, &ys).unwrap(),
                ys[ys.len() - 1]
            );
        }

        #[test]
        fn breakpoints_return_table_values(ys in table()) {
            for (i, &x) in SPEED_BREAKPOINTS.iter().enumerate() {
                prop_assert_eq!(interpolate(x, &SPEED_BREAKPOINTS, &ys).unwrap(), ys[i]);
            }
        }

        #[test]
        fn bounded_by_neighbours(ys in table(), x in 0.0_f64..100.0) {
            let y = interpolate(x, &SPEED_BREAKPOINTS, &ys).unwrap();
            let i = SPEED_BREAKPOINTS.partition_point(|&b| b < x).max(1);
            let lo = ys[i - 1].min(ys[i]);
            let hi = ys[i - 1].max(ys[i]);
            prop_assert!(y >= lo - 1e-9 && y <= hi + 1e-9);
        }

        #[test]
        fn continuous_at_interior_breakpoints(ys in table()) {
            let eps = 1e-9;
            for (i, &x) in SPEED_BREAKPOINTS.iter().enumerate().skip(1).take(SPEED_BREAKPOINTS.len() - 2) {
                let left = interpolate(x - eps, &SPEED_BREAKPOINTS, &ys).unwrap();
                let right = interpolate(x + eps, &SPEED_BREAKPOINTS, &ys).unwrap();
                prop_assert!((left - ys[i]).abs() < 1e-6);
                prop_assert!((right - ys[i]).abs() < 1e-6);
            }
        }
    }
}
