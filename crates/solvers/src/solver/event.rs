use titan_core::{Body, State};

/// Event emitted by the solve loop for each state it produces.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone)]
pub struct Event<'a, B> {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// The state produced at this step.
    pub state: &'a State<B>,
}

impl<B: Body> Event<'_, B> {
    /// Returns the time of the state at this step.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.state.time()
    }
}
