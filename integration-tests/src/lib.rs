//! Shared fixtures for cross-crate scenario tests.

use titan_core::{Body, Massive, State, Vector};

/// A named celestial body with a physical radius.
///
/// Distinct from [`titan_core::Particle`] so the scenarios exercise solvers
/// against a caller-defined body type.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub name: String,
    pub position: Vector,
    pub velocity: Vector,
    pub mass: f64,
    pub radius: f64,
}

impl Planet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            position: Vector::zeros(),
            velocity: Vector::zeros(),
            mass: 1.0,
            radius: 1.0,
        }
    }
}

impl Body for Planet {
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

impl Massive for Planet {
    fn mass(&self) -> f64 {
        self.mass
    }
}

/// A single planet at `x = 1`, the `y(0) = 1` initial condition.
pub fn unit_planet_state() -> State<Planet> {
    let mut planet = Planet::new("probe");
    planet.set_position(Vector::new(1.0, 0.0, 0.0));
    planet.set_velocity(Vector::zeros());
    State::new(vec![planet])
}

/// The Sun and the Earth on a circular orbit, SI units.
pub fn sun_earth() -> State<Planet> {
    const SUN_MASS: f64 = 1.988_47e30;
    const AU: f64 = 1.495_978_707e11;

    let mut sun = Planet::new("sun");
    sun.mass = SUN_MASS;
    sun.radius = 6.957e8;

    let speed = (titan_core::functions::NewtonianGravity::G * SUN_MASS / AU).sqrt();
    let mut earth = Planet::new("earth");
    earth.mass = 5.972_2e24;
    earth.radius = 6.371e6;
    earth.position = Vector::new(AU, 0.0, 0.0);
    earth.velocity = Vector::new(0.0, speed, 0.0);

    State::new(vec![sun, earth])
}
