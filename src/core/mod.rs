//! Machine-agnostic building blocks.
//!
//! - `State`: what a machine state must provide
//! - `Guard`: pure predicates used to gate host requests
//! - `StateHistory`: immutable record of accepted transitions
//!
//! Nothing here performs I/O or knows about pagination.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
