//! Current-limited torque model.
//!
//! Torque scales with the square of terminal voltage and current scales
//! linearly with it, so capping the current at `I_limit` when the motor would
//! naturally draw `I_full` reduces voltage to
//!
//! ```text
//! v = min(1, I_limit / I_full)
//! T = T_full · v²
//! I = I_full · v
//! ```
//!
//! A limit at or above the natural draw has no throttling effect.

use crate::error::{CurveError, CurveResult};
use crate::table::CurvePoint;

/// Torque and current actually produced at one speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OperatingPoint {
    /// Motor torque (% of rated torque)
    pub torque_pct: f64,
    /// Terminal current (% of rated current)
    pub current_pct: f64,
    /// Terminal voltage relative to supply, in [0, 1]
    pub voltage_ratio: f64,
}

impl OperatingPoint {
    /// Full supply voltage, no limiting.
    pub fn full_voltage(point: &CurvePoint) -> Self {
        Self {
            torque_pct: point.motor_torque_pct,
            current_pct: point.motor_current_pct,
            voltage_ratio: 1.0,
        }
    }

    /// Net accelerating torque against `load_torque_pct` (% of rated torque).
    pub fn net_margin_pct(&self, load_torque_pct: f64) -> f64 {
        self.torque_pct - load_torque_pct
    }
}

/// Voltage ratio a current limiter imposes, clamped to [0, 1].
pub fn voltage_ratio(current_limit_pct: f64, full_current_pct: f64) -> f64 {
    if full_current_pct <= 0.0 {
        return 1.0;
    }
    (current_limit_pct / full_current_pct).clamp(0.0, 1.0)
}

/// Apply a terminal current limit to the full-voltage curve point.
///
/// # Errors
/// Returns [`CurveError::InvalidArg`] for a non-finite or non-positive limit.
pub fn current_limited(point: &CurvePoint, current_limit_pct: f64) -> CurveResult<OperatingPoint> {
    if !current_limit_pct.is_finite() || current_limit_pct <= 0.0 {
        return Err(CurveError::InvalidArg {
            what: "current limit must be positive and finite",
        });
    }
    let v = voltage_ratio(current_limit_pct, point.motor_current_pct);
    Ok(OperatingPoint {
        torque_pct: point.motor_torque_pct * v * v,
        current_pct: point.motor_current_pct * v,
        voltage_ratio: v,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locked_rotor() -> CurvePoint {
        CurvePoint {
            motor_torque_pct: 80.0,
            motor_current_pct: 590.0,
            load_torque_pct: 12.0,
        }
    }

    #[test]
    fn limit_above_draw_has_no_effect() {
        let p = locked_rotor();
        let op = current_limited(&p, 700.0).unwrap();
        assert_eq!(op, OperatingPoint::full_voltage(&p));
        let op = current_limited(&p, 590.0).unwrap();
        assert_eq!(op.voltage_ratio, 1.0);
    }

    #[test]
    fn torque_scales_with_square_of_current_ratio() {
        let p = locked_rotor();
        let op = current_limited(&p, 295.0).unwrap();
        assert!((op.voltage_ratio - 0.5).abs() < 1e-12);
        assert!((op.torque_pct - 20.0).abs() < 1e-12);
        assert!((op.current_pct - 295.0).abs() < 1e-12);
        assert!((op.net_margin_pct(p.load_torque_pct) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn zero_natural_draw_is_unthrottled() {
        assert_eq!(voltage_ratio(300.0, 0.0), 1.0);
    }

    #[test]
    fn rejects_bad_limits() {
        let p = locked_rotor();
        assert!(current_limited(&p, 0.0).is_err());
        assert!(current_limited(&p, f64::NAN).is_err());
    }
}
