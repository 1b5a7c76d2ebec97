//! The pagination state machine.
//!
//! States, events and context are plain serde values. Transitions come from
//! a [`TransitionTable`]; [`PaginationMachine`] applies them one event at a
//! time and records every accepted transition.

mod builder;
mod context;
mod error;
mod event;
#[allow(clippy::module_inception)]
mod machine;
mod state;
mod table;

pub use builder::{RuleBuilder, TransitionTableBuilder};
pub use context::PageContext;
pub use error::BuildError;
pub use event::{EventKind, PageEvent};
pub use machine::{PaginationMachine, SendOutcome, HISTORY_LIMIT};
pub use state::PageState;
pub use table::{ContextAction, TransitionRule, TransitionTable};
