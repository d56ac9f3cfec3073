//! Minimum starting current search.
//!
//! A static check: for each candidate current limit, the current-limited motor
//! torque is compared with the load torque at every breakpoint below
//! [`SEARCH_SPEED_LIMIT_PCT`]. No integration is involved.

use ms_curves::{CurvePoint, SpeedCurveTable, current_limited};
use tracing::debug;

use crate::error::SolverResult;
use crate::range::CurrentRange;

/// Required worst-case net torque margin (% rated torque).
pub const SAFETY_MARGIN_PCT: f64 = 2.0;
/// Breakpoints at or above this speed are ignored by the search.
pub const SEARCH_SPEED_LIMIT_PCT: f64 = 95.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinCurrentStatus {
    /// A level in range keeps the margin everywhere.
    Found,
    /// No level in range is safe; the result carries the range top and 0 %.
    NoSafeLevel,
}

/// Lowest safe constant current limit and where its margin is tightest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinCurrentResult {
    pub status: MinCurrentStatus,
    /// Current limit (% rated current).
    pub current_limit_pct: f64,
    /// Speed (% synchronous) of the smallest net margin at that limit.
    pub critical_speed_pct: f64,
    /// Smallest net margin (% rated torque), when a level was found.
    pub min_margin_pct: Option<f64>,
}

impl MinCurrentResult {
    pub fn is_found(&self) -> bool {
        self.status == MinCurrentStatus::Found
    }
}

/// Worst-case static margin of one current limit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticMargin {
    pub min_margin_pct: f64,
    pub critical_speed_pct: f64,
    /// True if the net torque went negative at some breakpoint.
    pub crossed: bool,
}

impl StaticMargin {
    pub fn is_safe(&self) -> bool {
        !self.crossed && self.min_margin_pct >= SAFETY_MARGIN_PCT
    }
}

/// Evaluate the net margin at each breakpoint below the search speed limit.
///
/// Stops at the first breakpoint with negative net torque.
///
/// # Errors
/// Fails with a malformed-curve error if the table has unordered breakpoints
/// or non-finite entries.
pub fn static_margin(table: &SpeedCurveTable, current_limit_pct: f64) -> SolverResult<StaticMargin> {
    table.validate()?;
    let mut margin = StaticMargin {
        min_margin_pct: f64::INFINITY,
        critical_speed_pct: 0.0,
        crossed: false,
    };
    let rows = table
        .breakpoints()
        .iter()
        .zip(table.motor_torque_pct())
        .zip(table.motor_current_pct())
        .zip(table.load_torque_pct());

    for (((&speed_pct, &torque), &current), &load) in rows {
        if speed_pct >= SEARCH_SPEED_LIMIT_PCT {
            continue;
        }
        let point = CurvePoint {
            motor_torque_pct: torque,
            motor_current_pct: current,
            load_torque_pct: load,
        };
        let net = current_limited(&point, current_limit_pct)?.net_margin_pct(load);
        if net < margin.min_margin_pct {
            margin.min_margin_pct = net;
            margin.critical_speed_pct = speed_pct;
        }
        if net < 0.0 {
            margin.crossed = true;
            break;
        }
    }
    Ok(margin)
}

/// Scan `range` upwards and return the first level whose static margin is safe.
///
/// # Errors
/// Fails if the table is malformed or the range is invalid. Finding no safe
/// level is reported as [`MinCurrentStatus::NoSafeLevel`].
pub fn min_starting_current(
    table: &SpeedCurveTable,
    range: &CurrentRange,
) -> SolverResult<MinCurrentResult> {
    range.validate()?;

    for level in range.levels() {
        let limit = f64::from(level);
        let margin = static_margin(table, limit)?;
        if margin.is_safe() {
            debug!(
                current_limit_pct = limit,
                critical_speed_pct = margin.critical_speed_pct,
                min_margin_pct = margin.min_margin_pct,
                "minimum starting current found"
            );
            return Ok(MinCurrentResult {
                status: MinCurrentStatus::Found,
                current_limit_pct: limit,
                critical_speed_pct: margin.critical_speed_pct,
                min_margin_pct: Some(margin.min_margin_pct),
            });
        }
    }

    debug!(max_pct = range.max_pct, "no safe current limit in range");
    Ok(MinCurrentResult {
        status: MinCurrentStatus::NoSafeLevel,
        current_limit_pct: f64::from(range.max_pct),
        critical_speed_pct: 0.0,
        min_margin_pct: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_curves::{LoadPreset, MotorPreset};

    fn flat_table(torque: f64, current: f64, load: f64) -> SpeedCurveTable {
        SpeedCurveTable::new(
            vec![0.0, 50.0, 100.0],
            vec![torque; 3],
            vec![current; 3],
            vec![load; 3],
        )
        .unwrap()
    }

    #[test]
    fn margin_scales_with_square_of_limit() {
        // 100 % torque at 400 % current; a 200 % limit gives a quarter of it.
        let table = flat_table(100.0, 400.0, 10.0);
        let margin = static_margin(&table, 200.0).unwrap();
        assert!((margin.min_margin_pct - 15.0).abs() < 1e-12);
        assert!(!margin.crossed);
        assert!(margin.is_safe());
    }

    #[test]
    fn speeds_above_search_limit_are_ignored() {
        let table = SpeedCurveTable::new(
            vec![0.0, 50.0, 96.0],
            vec![100.0, 100.0, 0.0],
            vec![400.0, 400.0, 10.0],
            vec![10.0, 10.0, 90.0],
        )
        .unwrap();
        let margin = static_margin(&table, 400.0).unwrap();
        assert_eq!(margin.min_margin_pct, 90.0);
        assert!(!margin.crossed);
    }

    #[test]
    fn first_negative_margin_ends_the_scan() {
        let table = SpeedCurveTable::new(
            vec![0.0, 50.0, 80.0],
            vec![50.0, 10.0, 0.0],
            vec![100.0, 100.0, 100.0],
            vec![20.0, 20.0, 20.0],
        )
        .unwrap();
        let margin = static_margin(&table, 100.0).unwrap();
        assert!(margin.crossed);
        assert_eq!(margin.min_margin_pct, -10.0);
        assert_eq!(margin.critical_speed_pct, 50.0);
    }

    #[test]
    fn barely_positive_margin_is_not_safe() {
        let table = flat_table(100.0, 100.0, 99.0);
        let margin = static_margin(&table, 100.0).unwrap();
        assert!(!margin.crossed);
        assert!(!margin.is_safe());
    }

    #[test]
    fn oem_preset_needs_about_three_times_rated_current() {
        let table = SpeedCurveTable::from_presets(MotorPreset::Oem, LoadPreset::Oem);
        let result = min_starting_current(&table, &CurrentRange::default()).unwrap();
        assert!(result.is_found());
        assert_eq!(result.current_limit_pct, 286.0);
        assert_eq!(result.critical_speed_pct, 70.0);
        assert!(result.min_margin_pct.unwrap() >= SAFETY_MARGIN_PCT);
    }

    #[test]
    fn unreachable_margin_reports_sentinel() {
        let table = flat_table(50.0, 500.0, 49.0);
        let result = min_starting_current(&table, &CurrentRange::default()).unwrap();
        assert_eq!(result.status, MinCurrentStatus::NoSafeLevel);
        assert_eq!(result.current_limit_pct, 700.0);
        assert_eq!(result.critical_speed_pct, 0.0);
        assert_eq!(result.min_margin_pct, None);
    }

    #[test]
    fn malformed_table_is_an_error() {
        let table = flat_table(100.0, f64::NAN, 10.0);
        let err = min_starting_current(&table, &CurrentRange::default()).unwrap_err();
        assert!(err.is_malformed_curve());
    }

    #[test]
    fn nan_current_is_never_a_safe_margin() {
        let table = flat_table(100.0, f64::NAN, 10.0);
        let err = static_margin(&table, 300.0).unwrap_err();
        assert!(err.is_malformed_curve());
    }

    #[test]
    fn unsorted_breakpoints_are_rejected_by_margin_check() {
        let table = SpeedCurveTable::new(
            vec![0.0, 60.0, 30.0],
            vec![100.0; 3],
            vec![400.0; 3],
            vec![10.0; 3],
        )
        .unwrap();
        let err = static_margin(&table, 300.0).unwrap_err();
        assert!(err.is_malformed_curve());
    }
}
