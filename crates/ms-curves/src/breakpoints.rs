//! Shared speed grid for authored curves.

/// Speed breakpoints in percent of synchronous speed, denser above 80 %.
pub const SPEED_BREAKPOINTS: [f64; 19] = [
    0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 82.0, 84.0, 86.0, 88.0, 90.0, 92.0, 94.0,
    96.0, 98.0, 100.0,
];

/// Number of points on the standard grid.
pub const GRID_LEN: usize = SPEED_BREAKPOINTS.len();

/// Evenly spaced speed samples from 0 to 100 % inclusive.
///
/// `count` is clamped to at least 2 so both ends are always present.
pub fn speed_samples(count: usize) -> Vec<f64> {
    let count = count.max(2);
    let last = (count - 1) as f64;
    let mut points: Vec<f64> = (0..count).map(|i| i as f64 * 100.0 / last).collect();
    points[count - 1] = 100.0;
    points
}

/// 1001 samples at 0.1 % spacing, the resolution used for plotting exports.
pub fn dense_speed_samples() -> Vec<f64> {
    speed_samples(1001)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_strictly_increasing() {
        assert!(SPEED_BREAKPOINTS.windows(2).all(|w| w[1] > w[0]));
        assert_eq!(SPEED_BREAKPOINTS[0], 0.0);
        assert_eq!(SPEED_BREAKPOINTS[GRID_LEN - 1], 100.0);
    }

    #[test]
    fn dense_samples_cover_range() {
        let pts = dense_speed_samples();
        assert_eq!(pts.len(), 1001);
        assert_eq!(pts[0], 0.0);
        assert_eq!(pts[1000], 100.0);
        assert!((pts[1] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn samples_clamp_count() {
        assert_eq!(speed_samples(0), vec![0.0, 100.0]);
    }
}
