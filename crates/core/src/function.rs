use crate::{Body, Rates, State};

/// The right-hand side of an ODE over a system of bodies.
///
/// Evaluation is pure: identical `(time, state)` inputs must give identical
/// rates, and the state is never modified. The returned [`Rates`] hold one
/// entry per body in the state's index order.
///
/// Closures of the form `Fn(f64, &State<B>) -> Rates` implement this trait.
pub trait OdeFunction<B: Body> {
    /// Evaluates the rate of change of every body at `time`.
    fn evaluate(&self, time: f64, state: &State<B>) -> Rates;
}

impl<B, F> OdeFunction<B> for F
where
    B: Body,
    F: Fn(f64, &State<B>) -> Rates,
{
    fn evaluate(&self, time: f64, state: &State<B>) -> Rates {
        self(time, state)
    }
}
