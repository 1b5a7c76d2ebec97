//! Guard predicates over states.
//!
//! A guard answers "may this happen now?" without touching anything. Hosts
//! use them to gate requests, e.g. only asking for another page while the
//! machine reports that more is available.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;

/// Pure predicate over a state.
///
/// # Example
///
/// ```rust
/// use pageflow::core::Guard;
/// use pageflow::machine::PageState;
///
/// let can_load_more = Guard::new(|s: &PageState| matches!(s, PageState::More));
///
/// assert!(can_load_more.check(&PageState::More));
/// assert!(!can_load_more.check(&PageState::Fetching));
/// assert!(!can_load_more.check(&PageState::Complete));
/// ```
pub struct Guard<S: State> {
    label: &'static str,
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure, thread-safe predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Self::labeled("guard", predicate)
    }

    /// Create a guard with a label that shows up in logs and `Debug` output.
    pub fn labeled<F>(label: &'static str, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            label,
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that passes only in exactly this state.
    pub fn in_state(state: S) -> Self
    where
        S: 'static,
    {
        Self::labeled("in_state", move |s| *s == state)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Evaluate the predicate.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("label", &self.label).finish()
    }
}
