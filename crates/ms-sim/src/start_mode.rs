//! Starting method: direct-on-line or current-limited soft start.

use ms_curves::{CurvePoint, OperatingPoint, current_limited};

use crate::error::{SimError, SimResult};

/// Current-limit ramp of a soft starter.
///
/// The limit rises linearly from `initial_current_limit_pct` to
/// `final_current_limit_pct` over `ramp_duration_s` and is held at the final
/// value afterwards. All limits are in percent of rated current.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoftStartProfile {
    pub initial_current_limit_pct: f64,
    pub final_current_limit_pct: f64,
    pub ramp_duration_s: f64,
}

impl SoftStartProfile {
    pub fn new(
        initial_current_limit_pct: f64,
        final_current_limit_pct: f64,
        ramp_duration_s: f64,
    ) -> SimResult<Self> {
        let profile = Self {
            initial_current_limit_pct,
            final_current_limit_pct,
            ramp_duration_s,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Constant current limit for the whole start.
    pub fn constant(current_limit_pct: f64) -> SimResult<Self> {
        Self::new(current_limit_pct, current_limit_pct, 0.0)
    }

    pub fn validate(&self) -> SimResult<()> {
        for limit in [self.initial_current_limit_pct, self.final_current_limit_pct] {
            if !limit.is_finite() || limit <= 0.0 {
                return Err(SimError::InvalidArg {
                    what: "soft start current limit must be positive and finite",
                });
            }
        }
        if !self.ramp_duration_s.is_finite() || self.ramp_duration_s < 0.0 {
            return Err(SimError::InvalidArg {
                what: "soft start ramp duration must be non-negative and finite",
            });
        }
        Ok(())
    }

    /// True when the limit actually changes over time.
    pub fn has_ramp(&self) -> bool {
        self.ramp_duration_s > 0.0 && self.initial_current_limit_pct != self.final_current_limit_pct
    }

    /// Collapse a degenerate ramp (zero duration or equal limits) to a
    /// constant run at the final limit.
    pub fn normalized(&self) -> Self {
        if self.has_ramp() {
            *self
        } else {
            Self {
                initial_current_limit_pct: self.final_current_limit_pct,
                final_current_limit_pct: self.final_current_limit_pct,
                ramp_duration_s: 0.0,
            }
        }
    }

    /// Current limit (% of rated current) at elapsed time `t`.
    pub fn current_limit_at(&self, t: f64) -> f64 {
        if self.has_ramp() && t < self.ramp_duration_s {
            let frac = (t / self.ramp_duration_s).max(0.0);
            self.initial_current_limit_pct
                + (self.final_current_limit_pct - self.initial_current_limit_pct) * frac
        } else {
            self.final_current_limit_pct
        }
    }

    /// Current limit mapped onto speed instead of time, for curve plots.
    ///
    /// With a recorded `ramp_end_speed_pct` the limit is interpolated from the
    /// initial to the final value across `[0, ramp_end_speed_pct]`.
    pub fn current_limit_at_speed(&self, speed_pct: f64, ramp_end_speed_pct: Option<f64>) -> f64 {
        match ramp_end_speed_pct {
            Some(end) if self.has_ramp() && end > 0.0 && speed_pct <= end => {
                let frac = (speed_pct / end).max(0.0);
                self.initial_current_limit_pct
                    + (self.final_current_limit_pct - self.initial_current_limit_pct) * frac
            }
            _ => self.final_current_limit_pct,
        }
    }
}

/// How the motor is connected to the supply during the start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StartMode {
    DirectOnLine,
    SoftStart(SoftStartProfile),
}

impl StartMode {
    pub fn label(&self) -> &'static str {
        match self {
            StartMode::DirectOnLine => "DOL",
            StartMode::SoftStart(_) => "Soft Start",
        }
    }

    pub fn soft_start(&self) -> Option<&SoftStartProfile> {
        match self {
            StartMode::DirectOnLine => None,
            StartMode::SoftStart(p) => Some(p),
        }
    }

    /// Validate and collapse degenerate soft-start ramps.
    pub fn normalized(&self) -> SimResult<Self> {
        match self {
            StartMode::DirectOnLine => Ok(StartMode::DirectOnLine),
            StartMode::SoftStart(p) => {
                p.validate()?;
                Ok(StartMode::SoftStart(p.normalized()))
            }
        }
    }

    /// Operating point at elapsed time `t` for a full-voltage curve point.
    pub fn operating_point(&self, point: &CurvePoint, t: f64) -> SimResult<OperatingPoint> {
        match self {
            StartMode::DirectOnLine => Ok(OperatingPoint::full_voltage(point)),
            StartMode::SoftStart(p) => Ok(current_limited(point, p.current_limit_at(t))?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_interpolates_then_holds() {
        let p = SoftStartProfile::new(250.0, 350.0, 2.0).unwrap();
        assert_eq!(p.current_limit_at(0.0), 250.0);
        assert!((p.current_limit_at(1.0) - 300.0).abs() < 1e-12);
        assert_eq!(p.current_limit_at(2.0), 350.0);
        assert_eq!(p.current_limit_at(10.0), 350.0);
    }

    #[test]
    fn zero_ramp_uses_final_limit_immediately() {
        let p = SoftStartProfile::new(250.0, 400.0, 0.0).unwrap();
        assert!(!p.has_ramp());
        assert_eq!(p.current_limit_at(0.0), 400.0);
        assert_eq!(p.normalized().initial_current_limit_pct, 400.0);
    }

    #[test]
    fn equal_limits_collapse_to_constant() {
        let ramped = SoftStartProfile::new(300.0, 300.0, 5.0).unwrap();
        let constant = SoftStartProfile::constant(300.0).unwrap();
        assert_eq!(ramped.normalized(), constant);
    }

    #[test]
    fn speed_mapping() {
        let p = SoftStartProfile::new(200.0, 400.0, 3.0).unwrap();
        assert!((p.current_limit_at_speed(20.0, Some(40.0)) - 300.0).abs() < 1e-12);
        assert_eq!(p.current_limit_at_speed(60.0, Some(40.0)), 400.0);
        assert_eq!(p.current_limit_at_speed(10.0, None), 400.0);
    }

    #[test]
    fn rejects_bad_profiles() {
        assert!(SoftStartProfile::new(0.0, 300.0, 1.0).is_err());
        assert!(SoftStartProfile::new(300.0, 300.0, -1.0).is_err());
        assert!(SoftStartProfile::new(300.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn dol_is_unthrottled() {
        let point = CurvePoint {
            motor_torque_pct: 80.0,
            motor_current_pct: 590.0,
            load_torque_pct: 12.0,
        };
        let op = StartMode::DirectOnLine.operating_point(&point, 0.0).unwrap();
        assert_eq!(op.torque_pct, 80.0);
        let soft = StartMode::SoftStart(SoftStartProfile::constant(295.0).unwrap());
        let op = soft.operating_point(&point, 0.0).unwrap();
        assert!((op.torque_pct - 20.0).abs() < 1e-12);
    }
}
