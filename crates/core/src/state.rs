use std::slice;

use crate::Body;

/// A snapshot of every simulated body at one instant.
///
/// Body order is significant: index `i` refers to the same simulated body in
/// every state of a run. A state owns its body values, so states retained in
/// a trajectory stay valid while later states are computed.
///
/// An empty state is legal and describes a simulation with no bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct State<B> {
    time: f64,
    bodies: Vec<B>,
}

impl<B: Body> State<B> {
    /// Creates a state at `t = 0`.
    #[must_use]
    pub fn new(bodies: Vec<B>) -> Self {
        Self::at(0.0, bodies)
    }

    /// Creates a state at the given time.
    #[must_use]
    pub fn at(time: f64, bodies: Vec<B>) -> Self {
        Self { time, bodies }
    }

    /// Returns the time coordinate of this state.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Returns the bodies in index order.
    #[must_use]
    pub fn bodies(&self) -> &[B] {
        &self.bodies
    }

    /// Returns the body at `index`, if any.
    #[must_use]
    pub fn body(&self, index: usize) -> Option<&B> {
        self.bodies.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, B> {
        self.bodies.iter()
    }

    /// Returns this state restamped at `time`.
    #[must_use]
    pub fn with_time(self, time: f64) -> Self {
        Self { time, ..self }
    }

    /// Consumes the state and returns its bodies.
    #[must_use]
    pub fn into_bodies(self) -> Vec<B> {
        self.bodies
    }
}

impl<B: Body> FromIterator<B> for State<B> {
    fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, B: Body> IntoIterator for &'a State<B> {
    type Item = &'a B;
    type IntoIter = slice::Iter<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
