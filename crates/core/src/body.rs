use crate::Vector;

/// A simulated entity with a position and a velocity.
///
/// Bodies carry no physics of their own. A derivative function computes how
/// they change and a solver applies that change by producing new body values,
/// so implementors only need to expose their kinematics.
///
/// The `Clone` bound lets solvers materialize a fresh body for every step
/// without touching the one held by an earlier state.
pub trait Body: Clone {
    /// Returns the current position.
    fn position(&self) -> Vector;

    /// Returns the current velocity.
    fn velocity(&self) -> Vector;

    /// Overwrites the position.
    fn set_position(&mut self, position: Vector);

    /// Overwrites the velocity.
    fn set_velocity(&mut self, velocity: Vector);

    /// Returns a copy of this body with the given kinematics.
    ///
    /// All other attributes are carried over unchanged and `self` is not
    /// modified.
    #[must_use]
    fn with_kinematics(&self, position: Vector, velocity: Vector) -> Self {
        let mut next = self.clone();
        next.set_position(position);
        next.set_velocity(velocity);
        next
    }
}

/// A body with a mass, as needed by gravitational functions.
pub trait Massive: Body {
    /// Returns the mass of the body.
    fn mass(&self) -> f64;
}

/// A point mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vector,
    pub velocity: Vector,
    pub mass: f64,
}

impl Particle {
    /// Creates a particle from its position, velocity, and mass.
    #[must_use]
    pub fn new(position: Vector, velocity: Vector, mass: f64) -> Self {
        Self {
            position,
            velocity,
            mass,
        }
    }

    #[must_use]
    pub fn with_position(self, position: Vector) -> Self {
        Self { position, ..self }
    }

    #[must_use]
    pub fn with_velocity(self, velocity: Vector) -> Self {
        Self { velocity, ..self }
    }

    #[must_use]
    pub fn with_mass(self, mass: f64) -> Self {
        Self { mass, ..self }
    }
}

impl Default for Particle {
    /// A unit mass at rest at the origin.
    fn default() -> Self {
        Self::new(Vector::zeros(), Vector::zeros(), 1.0)
    }
}

impl Body for Particle {
    fn position(&self) -> Vector {
        self.position
    }

    fn velocity(&self) -> Vector {
        self.velocity
    }

    fn set_position(&mut self, position: Vector) {
        self.position = position;
    }

    fn set_velocity(&mut self, velocity: Vector) {
        self.velocity = velocity;
    }
}

impl Massive for Particle {
    fn mass(&self) -> f64 {
        self.mass
    }
}
