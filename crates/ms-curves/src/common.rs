//! Common helpers for curve calculations.

use crate::error::{CurveError, CurveResult};
use ms_core::numeric::ensure_finite;

/// Ensure a table entry is finite, reporting the offending index otherwise.
pub fn check_finite(value: f64, what: &'static str, index: usize) -> CurveResult<f64> {
    ensure_finite(value, what).map_err(|_| CurveError::MalformedCurve { what, index })
}

/// Ensure breakpoints are strictly increasing.
pub fn check_strictly_increasing(breakpoints: &[f64]) -> CurveResult<()> {
    for (i, pair) in breakpoints.windows(2).enumerate() {
        if !(pair[1] > pair[0]) {
            return Err(CurveError::MalformedCurve {
                what: "breakpoints not strictly increasing",
                index: i + 1,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_finite() {
        assert!(check_finite(1.0, "test", 0).is_ok());
        assert!(check_finite(f64::INFINITY, "test", 1).is_err());
        assert_eq!(
            check_finite(f64::NAN, "test", 3),
            Err(CurveError::MalformedCurve {
                what: "test",
                index: 3
            })
        );
    }

    #[test]
    fn test_strictly_increasing() {
        assert!(check_strictly_increasing(&[0.0, 10.0, 20.0]).is_ok());
        assert!(check_strictly_increasing(&[]).is_ok());
        assert_eq!(
            check_strictly_increasing(&[0.0, 10.0, 10.0]),
            Err(CurveError::MalformedCurve {
                what: "breakpoints not strictly increasing",
                index: 2
            })
        );
        assert!(check_strictly_increasing(&[0.0, f64::NAN]).is_err());
    }
}
