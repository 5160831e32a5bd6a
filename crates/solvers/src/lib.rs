//! Fixed-step numerical solvers for the Titan simulator.
//!
//! Every method implements [`Solver`], which splits integration into a
//! single-step update rule and a full-interval solve built on top of it. The
//! solve loop never knows which method or body type is in play.
//!
//! # Solvers
//!
//! - [`Euler`] — explicit (forward) Euler, first order
//! - [`RungeKutta4`] — classical four-stage Runge–Kutta, fourth order
//! - [`VelocityVerlet`] — symplectic velocity Verlet, second order
//! - [`Method`] — runtime selection among the above
//!
//! # Example
//!
//! ```
//! use titan_core::{Particle, State, Vector, functions::Exponential};
//! use titan_solvers::{Euler, Solver};
//!
//! let state = State::new(vec![Particle::default().with_position(Vector::x())]);
//! let solution = Euler.solve(&Exponential::default(), &state, 0.8, 0.2)?;
//!
//! assert_eq!(solution.history.len(), 5);
//! # Ok::<(), titan_solvers::Error>(())
//! ```

mod config;
mod error;
pub mod euler;
mod method;
mod plan;
pub mod runge_kutta;
mod solver;
pub mod verlet;

pub use config::{ConfigError, SolverConfig};
pub use error::Error;
pub use euler::Euler;
pub use method::{Method, UnknownMethod};
pub use plan::StepPlan;
pub use runge_kutta::RungeKutta4;
pub use solver::{Action, Event, Solution, Solver, Status};
pub use verlet::VelocityVerlet;
