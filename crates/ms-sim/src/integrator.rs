//! Fixed-step integrators for the starting transient.
//!
//! The state being advanced is the rotor speed together with the accumulated
//! I²t heat. Both integrators evaluate the current limit at the stage times
//! they sample, so a soft-start ramp is seen mid-step by RK4.

use crate::error::SimResult;
use crate::model::TransientModel;

/// One step of `dt` seconds from `(t, x)`.
pub trait Integrator {
    fn step<M: TransientModel>(
        &self,
        model: &M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State>;
}

/// Explicit Euler, one derivative evaluation per step. The default for
/// [`crate::run_start`].
#[derive(Clone, Debug)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step<M: TransientModel>(
        &self,
        model: &M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State> {
        let slope = model.rhs(t, x)?;
        Ok(advance(model, x, &slope, dt))
    }
}

/// Classical fourth-order Runge-Kutta.
#[derive(Clone, Debug)]
pub struct RK4;

impl Integrator for RK4 {
    fn step<M: TransientModel>(
        &self,
        model: &M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State> {
        let half = 0.5 * dt;
        let k1 = model.rhs(t, x)?;
        let k2 = model.rhs(t + half, &advance(model, x, &k1, half))?;
        let k3 = model.rhs(t + half, &advance(model, x, &k2, half))?;
        let k4 = model.rhs(t + dt, &advance(model, x, &k3, dt))?;

        // Simpson weights 1-2-2-1 over the four slopes.
        let inner = model.add(&k2, &k3);
        let outer = model.add(&k1, &k4);
        let slope = model.add(&outer, &model.scale(&inner, 2.0));
        Ok(advance(model, x, &slope, dt / 6.0))
    }
}

/// `x + h · slope`
fn advance<M: TransientModel>(model: &M, x: &M::State, slope: &M::State, h: f64) -> M::State {
    model.add(x, &model.scale(slope, h))
}
