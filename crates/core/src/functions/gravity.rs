use crate::{BodyRate, Massive, OdeFunction, Rates, State, Vector};

/// Newtonian gravity between point masses, with optional softening.
///
/// Produces second-order rates: each body's position rate is its velocity
/// and its velocity rate is the summed pairwise acceleration
///
/// ```text
/// a_i = Σ_j G m_j (x_j - x_i) / (|x_j - x_i|² + ε²)^(3/2)
/// ```
///
/// Pairs whose softened distance is zero (coincident bodies with `ε = 0`)
/// contribute nothing rather than producing infinities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub gravitational_constant: f64,
    pub softening: f64,
}

impl NewtonianGravity {
    /// The gravitational constant in SI units (m³ kg⁻¹ s⁻²).
    pub const G: f64 = 6.674_30e-11;

    #[must_use]
    pub fn new(gravitational_constant: f64) -> Self {
        Self {
            gravitational_constant,
            softening: 0.0,
        }
    }

    #[must_use]
    pub fn with_softening(self, softening: f64) -> Self {
        Self { softening, ..self }
    }

    /// Returns the acceleration of every body.
    #[must_use]
    pub fn accelerations<B: Massive>(&self, state: &State<B>) -> Vec<Vector> {
        let bodies = state.bodies();
        let eps2 = self.softening * self.softening;
        let mut out = vec![Vector::zeros(); bodies.len()];

        // Each unordered pair once; i pulled along +r, j along -r.
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let r = bodies[j].position() - bodies[i].position();
                let d2 = r.norm_squared() + eps2;
                if d2 == 0.0 {
                    continue;
                }

                let inv_r3 = d2.sqrt().powi(3).recip();
                let coef = self.gravitational_constant * inv_r3;

                out[i] += r * (coef * bodies[j].mass());
                out[j] -= r * (coef * bodies[i].mass());
            }
        }

        out
    }
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self::new(Self::G)
    }
}

impl<B: Massive> OdeFunction<B> for NewtonianGravity {
    fn evaluate(&self, _time: f64, state: &State<B>) -> Rates {
        state
            .iter()
            .zip(self.accelerations(state))
            .map(|(body, acceleration)| BodyRate::second_order(body.velocity(), acceleration))
            .collect()
    }
}
