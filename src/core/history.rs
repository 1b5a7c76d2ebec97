//! Transition history.
//!
//! Every accepted event leaves a record here. Ignored events do not, so the
//! history is exactly the path the machine walked.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One accepted transition.
///
/// # Example
///
/// ```rust
/// use pageflow::core::StateTransition;
/// use pageflow::machine::PageState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: PageState::Idle,
///     to: PageState::Fetching,
///     event: "FETCH".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.event, "FETCH");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    pub from: S,
    pub to: S,
    /// Kind of the event that triggered the move
    pub event: String,
    pub timestamp: DateTime<Utc>,
}

/// Ordered, immutable history of transitions.
///
/// `record` returns a new history and leaves the receiver untouched.
/// `record_bounded` consumes the history instead and keeps at most `limit`
/// of the newest transitions, so long-lived machines stay bounded.
///
/// # Example
///
/// ```rust
/// use pageflow::core::{StateHistory, StateTransition};
/// use pageflow::machine::PageState;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: PageState::Idle,
///         to: PageState::Fetching,
///         event: "FETCH".to_string(),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: PageState::Fetching,
///         to: PageState::More,
///         event: "MORE".to_string(),
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&PageState::Idle, &PageState::Fetching, &PageState::More]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Record a transition, dropping the oldest entries beyond `limit`.
    ///
    /// Once entries are dropped, the path starts at the oldest retained
    /// transition.
    pub fn record_bounded(mut self, transition: StateTransition<S>, limit: usize) -> Self {
        self.transitions.push(transition);
        if self.transitions.len() > limit {
            let excess = self.transitions.len() - limit;
            self.transitions.drain(..excess);
        }
        self
    }

    /// States traversed: the first `from`, then every `to` in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Number of times `state` was entered.
    pub fn entries_into(&self, state: &S) -> usize {
        self.transitions.iter().filter(|t| &t.to == state).count()
    }

    /// Elapsed time between the first and last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        match (self.transitions.first(), self.transitions.last()) {
            (Some(first), Some(last)) => last
                .timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok(),
            _ => None,
        }
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
