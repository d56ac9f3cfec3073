use crate::{MsError, MsResult};

pub fn ensure_finite(v: f64, what: &'static str) -> MsResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(MsError::NonFinite { what, value: v })
    }
}

/// Finite and strictly positive, the usual requirement for nameplate data.
pub fn ensure_positive(v: f64, what: &'static str) -> MsResult<f64> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(MsError::InvalidArg { what })
    }
}

/// Convert a percentage (100 = 1.0 per-unit) to per-unit.
#[inline]
pub fn pct_to_pu(pct: f64) -> f64 {
    pct / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(f64::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive(1.5, "x").is_ok());
        assert!(matches!(
            ensure_positive(0.0, "x"),
            Err(MsError::InvalidArg { .. })
        ));
        assert!(ensure_positive(-2.0, "x").is_err());
        assert!(matches!(
            ensure_positive(f64::INFINITY, "x"),
            Err(MsError::NonFinite { .. })
        ));
    }

    #[test]
    fn pct_conversion() {
        assert_eq!(pct_to_pu(250.0), 2.5);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn positive_values_pass_through(v in 1e-9_f64..1e9) {
            prop_assert_eq!(ensure_positive(v, "v").unwrap(), v);
        }

        #[test]
        fn non_positive_values_are_rejected(v in -1e9_f64..=0.0) {
            prop_assert!(ensure_positive(v, "v").is_err());
        }
    }
}
