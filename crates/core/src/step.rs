use crate::{Body, Rates, State};

/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets generic solvers advance the type via
/// `value + derivative * delta`, where the derivative is taken with respect
/// to `Delta`. Stepping never modifies `self`; it returns the next value.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

impl<B: Body> StepIntegrable<f64> for State<B> {
    type Derivative = Rates;

    /// Returns a fresh state at `time + delta`.
    ///
    /// Body `i` moves by `rates[i] * delta`:
    ///
    /// ```text
    /// x_i' = x_i + dx_i/dt * delta
    /// v_i' = v_i + dv_i/dt * delta
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the number of rates differs from the number of bodies,
    /// which means the derivative function broke its contract.
    fn step(&self, derivative: Rates, delta: f64) -> Self {
        derivative.assert_bodies(self.len());

        let bodies = self
            .iter()
            .zip(derivative.iter())
            .map(|(body, rate)| {
                body.with_kinematics(
                    body.position() + rate.position * delta,
                    body.velocity() + rate.velocity * delta,
                )
            })
            .collect();

        State::at(self.time() + delta, bodies)
    }
}
