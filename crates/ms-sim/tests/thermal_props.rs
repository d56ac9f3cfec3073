//! Property checks over randomized soft-start settings.

use ms_core::units::{amps, hz, kg_m2, kw, rpm, s};
use ms_curves::{LoadPreset, MotorPreset, SpeedCurveTable};
use ms_sim::{MotorParameters, SimOptions, SoftStartProfile, StartMode, run_start};
use proptest::prelude::*;

fn motor(inertia: f64) -> MotorParameters {
    MotorParameters::new(
        kw(110.0),
        rpm(1480.0),
        4,
        hz(50.0),
        amps(190.0),
        s(15.0),
        kg_m2(inertia),
    )
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn thermal_stress_is_monotonic(
        initial in 200.0_f64..700.0,
        last in 200.0_f64..700.0,
        ramp in 0.0_f64..10.0,
        inertia in 5.0_f64..60.0,
    ) {
        let table = SpeedCurveTable::from_presets(MotorPreset::Oem, LoadPreset::Oem);
        let mode = StartMode::SoftStart(SoftStartProfile::new(initial, last, ramp).unwrap());
        let opts = SimOptions { record_every: Some(1), ..SimOptions::default() };
        let result = run_start(&table, &motor(inertia), &mode, &opts).unwrap();

        for pair in result.trace.windows(2) {
            prop_assert!(pair[1].thermal_pct >= pair[0].thermal_pct);
        }
        prop_assert!(result.thermal.ampere_squared_seconds >= 0.0);
    }

    #[test]
    fn reruns_are_identical(limit in 250.0_f64..700.0, inertia in 5.0_f64..60.0) {
        let table = SpeedCurveTable::from_presets(MotorPreset::DesignC, LoadPreset::Centrifugal);
        let mode = StartMode::SoftStart(SoftStartProfile::constant(limit).unwrap());
        let m = motor(inertia);
        let a = run_start(&table, &m, &mode, &SimOptions::default()).unwrap();
        let b = run_start(&table, &m, &mode, &SimOptions::default()).unwrap();
        prop_assert_eq!(a, b);
    }
}
