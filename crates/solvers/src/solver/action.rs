/// Control actions supported by the solve loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the trajectory so far.
    StopEarly,
}
