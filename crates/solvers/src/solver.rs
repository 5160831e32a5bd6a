//! The solver contract and the shared solve loop.
//!
//! A solver supplies one update rule, [`Solver::step`]. The provided
//! [`Solver::solve`] and [`Solver::solve_observed`] drive that rule across a
//! validated [`StepPlan`]:
//!
//! ```text
//! state_0     = initial (restamped at t = 0)
//! state_{k+1} = step(function, t_k, state_k, h)      for k in 0..steps
//! t_k         = k * h
//! ```
//!
//! Each step produces fresh body values, so every state in the returned
//! history stays valid and unchanged.

mod action;
mod event;
mod solution;

pub use action::Action;
pub use event::Event;
pub use solution::{Solution, Status};

use titan_core::{Body, OdeFunction, Observer, State};
use tracing::{debug, trace};

use crate::{Error, StepPlan};

/// Most states reserved up front; longer histories grow as they run.
const PREALLOCATED_STATES: usize = 4096;

/// A fixed-step numerical integration method.
///
/// Implementors hold no mutable state, so one instance can be reused across
/// any number of independent simulations.
pub trait Solver {
    /// Returns the name of the method.
    fn name(&self) -> &'static str;

    /// Returns the order of accuracy of the method.
    fn order(&self) -> usize;

    /// Advances `state` from `time` to `time + h`.
    ///
    /// Returns a new state; neither `state` nor its bodies are modified.
    /// Callers are expected to pass a positive `h`; [`Solver::solve`]
    /// validates it before stepping.
    fn step<B, F>(&self, function: &F, time: f64, state: &State<B>, h: f64) -> State<B>
    where
        B: Body,
        F: OdeFunction<B>;

    /// Integrates from `t = 0` to `final_time` with fixed step `h`.
    ///
    /// The returned history holds `floor(final_time / h) + 1` states, the
    /// first being `initial` at `t = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStepSize`] if `h <= 0` and
    /// [`Error::InvalidInterval`] if `final_time < 0`.
    fn solve<B, F>(
        &self,
        function: &F,
        initial: &State<B>,
        final_time: f64,
        h: f64,
    ) -> Result<Solution<B>, Error>
    where
        B: Body,
        F: OdeFunction<B>,
    {
        self.solve_observed(function, initial, final_time, h, ())
    }

    /// Integrates like [`Solver::solve`], reporting each state to `observer`.
    ///
    /// The observer receives an [`Event`] for the initial state and after
    /// every step, and may return [`Action::StopEarly`] to end the run.
    ///
    /// # Errors
    ///
    /// Returns an error if `final_time` or `h` fail validation.
    fn solve_observed<B, F, Obs>(
        &self,
        function: &F,
        initial: &State<B>,
        final_time: f64,
        h: f64,
        observer: Obs,
    ) -> Result<Solution<B>, Error>
    where
        B: Body,
        F: OdeFunction<B>,
        Obs: for<'a> Observer<Event<'a, B>, Action>,
    {
        let plan = StepPlan::new(final_time, h)?;
        Ok(self.solve_planned(function, initial, &plan, observer))
    }

    /// Integrates over an already validated plan.
    fn solve_planned<B, F, Obs>(
        &self,
        function: &F,
        initial: &State<B>,
        plan: &StepPlan,
        mut observer: Obs,
    ) -> Solution<B>
    where
        B: Body,
        F: OdeFunction<B>,
        Obs: for<'a> Observer<Event<'a, B>, Action>,
    {
        debug!(
            method = self.name(),
            bodies = initial.len(),
            steps = plan.steps(),
            step_size = plan.step_size(),
            final_time = plan.final_time(),
            "starting solve"
        );

        let mut history = Vec::with_capacity(plan.len().min(PREALLOCATED_STATES));
        history.push(initial.clone().with_time(plan.time_at(0)));

        let action = observer.observe(&Event {
            step: 0,
            state: &history[0],
        });
        if let Some(Action::StopEarly) = action {
            debug!(method = self.name(), step = 0, "stopped by observer");
            return Solution {
                status: Status::StoppedByObserver,
                history,
                steps: 0,
            };
        }

        for step in 1..=plan.steps() {
            let current = &history[step - 1];
            let next = self
                .step(function, current.time(), current, plan.step_size())
                .with_time(plan.time_at(step));

            trace!(step, time = next.time(), "step complete");
            history.push(next);

            let action = observer.observe(&Event {
                step,
                state: &history[step],
            });
            if let Some(Action::StopEarly) = action {
                debug!(method = self.name(), step, "stopped by observer");
                return Solution {
                    status: Status::StoppedByObserver,
                    history,
                    steps: step,
                };
            }
        }

        debug!(method = self.name(), steps = plan.steps(), "solve complete");

        Solution {
            status: Status::Complete,
            history,
            steps: plan.steps(),
        }
    }
}
