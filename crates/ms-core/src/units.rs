// ms-core/src/units.rs

use uom::si::f64::{
    AngularVelocity as UomAngularVelocity, ElectricCurrent as UomElectricCurrent,
    Frequency as UomFrequency, MomentOfInertia as UomMomentOfInertia, Power as UomPower,
    Time as UomTime, Torque as UomTorque,
};

// Public canonical unit types (SI, f64)
pub type AngularVelocity = UomAngularVelocity;
pub type Current = UomElectricCurrent;
pub type Frequency = UomFrequency;
pub type Inertia = UomMomentOfInertia;
pub type Power = UomPower;
pub type Time = UomTime;
pub type Torque = UomTorque;

#[inline]
pub fn kw(v: f64) -> Power {
    use uom::si::power::kilowatt;
    Power::new::<kilowatt>(v)
}

#[inline]
pub fn rpm(v: f64) -> AngularVelocity {
    use uom::si::angular_velocity::revolution_per_minute;
    AngularVelocity::new::<revolution_per_minute>(v)
}

#[inline]
pub fn hz(v: f64) -> Frequency {
    use uom::si::frequency::hertz;
    Frequency::new::<hertz>(v)
}

#[inline]
pub fn amps(v: f64) -> Current {
    use uom::si::electric_current::ampere;
    Current::new::<ampere>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn kg_m2(v: f64) -> Inertia {
    use uom::si::moment_of_inertia::kilogram_square_meter;
    Inertia::new::<kilogram_square_meter>(v)
}

#[inline]
pub fn nm(v: f64) -> Torque {
    use uom::si::torque::newton_meter;
    Torque::new::<newton_meter>(v)
}

pub mod constants {
    /// kW → N·m at a given shaft speed in rpm: T = P · 9550 / n.
    pub const KW_RPM_TO_NM: f64 = 9550.0;

    /// Synchronous speed numerator: n_s = 120 · f / p.
    pub const SYNC_SPEED_FACTOR: f64 = 120.0;
}
