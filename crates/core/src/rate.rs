use std::{
    ops::{Add, Mul},
    slice, vec,
};

use crate::Vector;

/// The instantaneous rate of change of one body.
///
/// `position` is `dx/dt` and `velocity` is `dv/dt`. A first-order model
/// reports a position rate only, while a second-order (Newtonian) model
/// reports the body's velocity as the position rate and its acceleration as
/// the velocity rate. Solvers apply both fields, so the coupling between a
/// function and the body attributes it drives is carried by this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyRate {
    pub position: Vector,
    pub velocity: Vector,
}

impl BodyRate {
    /// A rate that changes nothing.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            position: Vector::zeros(),
            velocity: Vector::zeros(),
        }
    }

    /// A first-order rate: `dx/dt = rate`, velocity unchanged.
    #[must_use]
    pub fn first_order(rate: Vector) -> Self {
        Self {
            position: rate,
            velocity: Vector::zeros(),
        }
    }

    /// A second-order rate: `dx/dt = velocity` and `dv/dt = acceleration`.
    #[must_use]
    pub fn second_order(velocity: Vector, acceleration: Vector) -> Self {
        Self {
            position: velocity,
            velocity: acceleration,
        }
    }
}

impl Default for BodyRate {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for BodyRate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            position: self.position + rhs.position,
            velocity: self.velocity + rhs.velocity,
        }
    }
}

impl Mul<f64> for BodyRate {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            position: self.position * rhs,
            velocity: self.velocity * rhs,
        }
    }
}

/// Rates for every body of a state, in the state's index order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rates(Vec<BodyRate>);

impl Rates {
    #[must_use]
    pub fn new(rates: Vec<BodyRate>) -> Self {
        Self(rates)
    }

    /// Zero rates for `len` bodies.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self(vec![BodyRate::zero(); len])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BodyRate> {
        self.0.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, BodyRate> {
        self.0.iter()
    }

    /// Checks that there is exactly one rate per body.
    ///
    /// # Panics
    ///
    /// Panics if the number of rates differs from `bodies`, which means the
    /// derivative function broke its contract.
    #[track_caller]
    pub fn assert_bodies(&self, bodies: usize) {
        assert_eq!(
            self.len(),
            bodies,
            "derivative has {} rates for {} bodies",
            self.len(),
            bodies
        );
    }
}

impl FromIterator<BodyRate> for Rates {
    fn from_iter<I: IntoIterator<Item = BodyRate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Rates {
    type Item = BodyRate;
    type IntoIter = vec::IntoIter<BodyRate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Rates {
    type Item = &'a BodyRate;
    type IntoIter = slice::Iter<'a, BodyRate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Element-wise sum.
///
/// # Panics
///
/// Panics if the operands describe a different number of bodies.
impl Add for Rates {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        assert_eq!(
            self.len(),
            rhs.len(),
            "cannot add rates for {} and {} bodies",
            self.len(),
            rhs.len()
        );
        self.0.into_iter().zip(rhs.0).map(|(a, b)| a + b).collect()
    }
}

impl Mul<f64> for Rates {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.0.into_iter().map(|rate| rate * rhs).collect()
    }
}
