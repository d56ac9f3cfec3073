//! Model seam between the start dynamics and the integrators.

use crate::error::SimResult;

/// An ODE `dx/dt = f(t, x)` with vector-space operations on its state.
///
/// `rhs` takes `&self`: evaluating a derivative never mutates the model, so
/// the stages of one step all see the same model.
pub trait TransientModel {
    type State: Clone;

    /// State at standstill, t = 0.
    fn initial_state(&self) -> Self::State;

    /// Derivative of the state at time `t`.
    fn rhs(&self, t: f64, x: &Self::State) -> SimResult<Self::State>;

    /// `a + b`
    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    /// `scale · a`
    fn scale(&self, a: &Self::State, scale: f64) -> Self::State;
}
