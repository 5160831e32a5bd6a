//! Core traits and types for the Titan simulator.
//!
//! This crate defines the shared abstractions that solvers and simulations
//! build on:
//!
//! - [`Body`] — a simulated entity with settable position and velocity
//! - [`State`] — an ordered snapshot of bodies at one instant
//! - [`Rates`] — the per-body rate of change produced by a derivative function
//! - [`OdeFunction`] — the right-hand side of the ODE, `(t, state) -> rates`
//! - [`StepIntegrable`] — values that can be advanced by `derivative * delta`
//! - [`Observer`] — receives solver events and optionally returns control actions
//!
//! Concrete reference functions live in [`functions`].

mod body;
mod function;
pub mod functions;
mod observer;
mod rate;
mod state;
mod step;

pub use body::{Body, Massive, Particle};
pub use function::OdeFunction;
pub use observer::Observer;
pub use rate::{BodyRate, Rates};
pub use state::State;
pub use step::StepIntegrable;

/// The three-component vector used for positions, velocities, and rates.
pub type Vector = nalgebra::Vector3<f64>;
