//! Errors raised while assembling a transition table.

use super::event::EventKind;
use super::state::PageState;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Rule source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Rule event not specified. Call .on(kind)")]
    MissingEvent,

    #[error("Rule target state not specified. Call .to(state)")]
    MissingToState,

    #[error("No rules defined. Add at least one rule")]
    NoRules,

    #[error("Duplicate rule for {event} in state '{state}'")]
    DuplicateRule { state: PageState, event: EventKind },

    #[error("Rule sends idle back to idle on FETCH, which would restart forever")]
    IdleRestartLoop,

    #[error("Rule leaves terminal state '{state}' on {event}")]
    LeavesTerminal { state: PageState, event: EventKind },
}
