use crate::{Body, BodyRate, OdeFunction, Rates, State};

/// First-order exponential growth, `dx/dt = rate * x`.
///
/// Each body's position is the dependent variable; velocities are left
/// unchanged. With the default `rate = 1` this is the `dy/dt = y` equation,
/// whose solution from `y(0) = 1` is `e^t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    pub rate: f64,
}

impl Exponential {
    #[must_use]
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

impl Default for Exponential {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl<B: Body> OdeFunction<B> for Exponential {
    fn evaluate(&self, _time: f64, state: &State<B>) -> Rates {
        state
            .iter()
            .map(|body| BodyRate::first_order(body.position() * self.rate))
            .collect()
    }
}
