//! Speed-indexed curve family for plotting.
//!
//! A pure re-application of the curve lookup and torque model at arbitrary
//! speed samples; no simulation state is involved.

use ms_curves::{OperatingPoint, SpeedCurveTable, current_limited};

use crate::error::SimResult;
use crate::start_mode::StartMode;

/// Soft-start curves after current limiting.
#[derive(Clone, Debug, PartialEq)]
pub struct LimitedCurves {
    /// Current limit applied at each sample (% rated current)
    pub current_limit_pct: Vec<f64>,
    pub torque_pct: Vec<f64>,
    pub current_pct: Vec<f64>,
}

/// Full-voltage curves, load curve and, for soft starts, the limited curves.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveFamily {
    pub speed_pct: Vec<f64>,
    pub motor_torque_pct: Vec<f64>,
    pub motor_current_pct: Vec<f64>,
    pub load_torque_pct: Vec<f64>,
    pub limited: Option<LimitedCurves>,
}

impl CurveFamily {
    pub fn len(&self) -> usize {
        self.speed_pct.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speed_pct.is_empty()
    }
}

/// Evaluate the curve family at `samples` (% synchronous speed).
///
/// For a soft start, the current limit is mapped onto speed using
/// `ramp_end_speed_pct` from a previous run (see
/// [`crate::SoftStartProfile::current_limit_at_speed`]).
pub fn curve_family(
    table: &SpeedCurveTable,
    mode: &StartMode,
    ramp_end_speed_pct: Option<f64>,
    samples: &[f64],
) -> SimResult<CurveFamily> {
    table.validate()?;
    let mode = mode.normalized()?;
    let profile = mode.soft_start().copied();

    let n = samples.len();
    let mut family = CurveFamily {
        speed_pct: samples.to_vec(),
        motor_torque_pct: Vec::with_capacity(n),
        motor_current_pct: Vec::with_capacity(n),
        load_torque_pct: Vec::with_capacity(n),
        limited: profile.map(|_| LimitedCurves {
            current_limit_pct: Vec::with_capacity(n),
            torque_pct: Vec::with_capacity(n),
            current_pct: Vec::with_capacity(n),
        }),
    };

    for &speed in samples {
        let point = table.sample(speed)?;
        family.motor_torque_pct.push(point.motor_torque_pct);
        family.motor_current_pct.push(point.motor_current_pct);
        family.load_torque_pct.push(point.load_torque_pct);

        if let (Some(p), Some(limited)) = (profile.as_ref(), family.limited.as_mut()) {
            let limit = p.current_limit_at_speed(speed, ramp_end_speed_pct);
            let OperatingPoint {
                torque_pct,
                current_pct,
                ..
            } = current_limited(&point, limit)?;
            limited.current_limit_pct.push(limit);
            limited.torque_pct.push(torque_pct);
            limited.current_pct.push(current_pct);
        }
    }

    Ok(family)
}
