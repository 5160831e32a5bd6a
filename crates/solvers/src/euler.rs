//! Explicit (forward) Euler.
//!
//! Advances every body with the rate evaluated at the start of the step:
//!
//! ```text
//! x_{n+1} = x_n + h * dx/dt(t_n, state_n)
//! v_{n+1} = v_n + h * dv/dt(t_n, state_n)
//! ```
//!
//! First order and only conditionally stable. No safeguard is applied: NaN
//! or infinite rates flow into the next state unchanged.

use titan_core::{Body, OdeFunction, State, StepIntegrable};

use crate::Solver;

/// The forward Euler method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euler;

impl Solver for Euler {
    fn name(&self) -> &'static str {
        "euler"
    }

    fn order(&self) -> usize {
        1
    }

    fn step<B, F>(&self, function: &F, time: f64, state: &State<B>, h: f64) -> State<B>
    where
        B: Body,
        F: OdeFunction<B>,
    {
        state.step(function.evaluate(time, state), h)
    }
}
