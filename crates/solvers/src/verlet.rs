//! Velocity Verlet.
//!
//! A second-order symplectic method for second-order rates, where the
//! position rate is the body's velocity and the velocity rate is its
//! acceleration:
//!
//! ```text
//! x_{n+1} = x_n + h v_n + h²/2 a(x_n)
//! v_{n+1} = v_n + h/2 (a(x_n) + a(x_{n+1}))
//! ```
//!
//! Two rate evaluations per step. Energy error stays bounded for
//! conservative systems such as orbits, where Euler drifts.

use titan_core::{Body, BodyRate, OdeFunction, Rates, State, StepIntegrable};

use crate::Solver;

/// The velocity Verlet method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VelocityVerlet;

impl Solver for VelocityVerlet {
    fn name(&self) -> &'static str {
        "velocity-verlet"
    }

    fn order(&self) -> usize {
        2
    }

    fn step<B, F>(&self, function: &F, time: f64, state: &State<B>, h: f64) -> State<B>
    where
        B: Body,
        F: OdeFunction<B>,
    {
        let rates = function.evaluate(time, state);

        // Drift: full-step positions with the start-of-step acceleration,
        // `x + h (v + h/2 a)`, velocities held.
        let drift: Rates = rates
            .iter()
            .map(|rate| BodyRate::first_order(rate.position + rate.velocity * (0.5 * h)))
            .collect();
        let drifted = state.step(drift, h);

        // Kick: average the accelerations at both ends of the step.
        let next_rates = function.evaluate(time + h, &drifted);
        next_rates.assert_bodies(state.len());

        let bodies = drifted
            .iter()
            .zip(rates.iter().zip(next_rates.iter()))
            .map(|(body, (start, end))| {
                body.with_kinematics(
                    body.position(),
                    body.velocity() + (start.velocity + end.velocity) * (0.5 * h),
                )
            })
            .collect();

        State::at(time + h, bodies)
    }
}
