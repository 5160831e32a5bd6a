//! Classical fourth-order Runge–Kutta.
//!
//! Combines four rate evaluations per step:
//!
//! ```text
//! k1 = f(t,       y)
//! k2 = f(t + h/2, y + h/2 * k1)
//! k3 = f(t + h/2, y + h/2 * k2)
//! k4 = f(t + h,   y + h   * k3)
//!
//! y_{n+1} = y_n + h/6 * (k1 + 2 k2 + 2 k3 + k4)
//! ```
//!
//! Intermediate states are scratch values; only `y_{n+1}` is returned.

use titan_core::{Body, OdeFunction, State, StepIntegrable};

use crate::Solver;

/// The classical RK4 method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RungeKutta4;

impl Solver for RungeKutta4 {
    fn name(&self) -> &'static str {
        "rk4"
    }

    fn order(&self) -> usize {
        4
    }

    fn step<B, F>(&self, function: &F, time: f64, state: &State<B>, h: f64) -> State<B>
    where
        B: Body,
        F: OdeFunction<B>,
    {
        let half = 0.5 * h;

        let k1 = function.evaluate(time, state);
        let k2 = function.evaluate(time + half, &state.step(k1.clone(), half));
        let k3 = function.evaluate(time + half, &state.step(k2.clone(), half));
        let k4 = function.evaluate(time + h, &state.step(k3.clone(), h));

        let weighted = (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (1.0 / 6.0);
        state.step(weighted, h)
    }
}
