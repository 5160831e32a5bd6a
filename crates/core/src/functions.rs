//! Reference derivative functions.
//!
//! - [`Exponential`] — first-order growth or decay, `dx/dt = k x`
//! - [`ConstantAcceleration`] — a uniform field acting on every body
//! - [`NewtonianGravity`] — pairwise Newtonian attraction between point masses

mod constant;
mod exponential;
mod gravity;

pub use constant::ConstantAcceleration;
pub use exponential::Exponential;
pub use gravity::NewtonianGravity;
