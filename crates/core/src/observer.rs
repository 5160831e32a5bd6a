/// Watches a simulation as it runs and may ask it to stop.
///
/// The solve loop hands the observer every state it records, starting with
/// the initial one, before taking the next step. Returning `Some(action)`
/// asks the loop to act on it; `None` keeps integrating.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never intervenes.
pub trait Observer<E, A> {
    /// Inspects one recorded state and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
