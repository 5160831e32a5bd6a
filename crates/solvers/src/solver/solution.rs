use titan_core::{Body, State};

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all planned steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a solve: the trajectory and how it ended.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<B> {
    /// How the solver terminated.
    pub status: Status,

    /// States from each step in time order, including the initial state.
    pub history: Vec<State<B>>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl<B: Body> Solution<B> {
    /// Returns the initial state.
    #[must_use]
    pub fn initial(&self) -> Option<&State<B>> {
        self.history.first()
    }

    /// Returns the last state reached.
    #[must_use]
    pub fn last(&self) -> Option<&State<B>> {
        self.history.last()
    }

    /// Returns the time of every state in the trajectory.
    #[must_use]
    pub fn times(&self) -> Vec<f64> {
        self.history.iter().map(State::time).collect()
    }
}
