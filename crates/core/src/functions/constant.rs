use crate::{Body, BodyRate, OdeFunction, Rates, State, Vector};

/// A uniform acceleration field, such as surface gravity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantAcceleration {
    pub acceleration: Vector,
}

impl ConstantAcceleration {
    #[must_use]
    pub fn new(acceleration: Vector) -> Self {
        Self { acceleration }
    }
}

impl<B: Body> OdeFunction<B> for ConstantAcceleration {
    fn evaluate(&self, _time: f64, state: &State<B>) -> Rates {
        state
            .iter()
            .map(|body| BodyRate::second_order(body.velocity(), self.acceleration))
            .collect()
    }
}
