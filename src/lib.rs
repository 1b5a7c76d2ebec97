//! Pageflow: a finite-state machine for paginated lists
//!
//! A list host asks for pages; the machine decides whether a request is
//! allowed right now and records what was loaded. The machine itself is a
//! pure transition table. Timers and fetch tasks live in the runtime around
//! it.
//!
//! # Core Concepts
//!
//! - **States**: `idle`, `fetching`, `more`, `complete`, `fail`
//! - **Events**: `FETCH`, `MORE`, `DONE`, `FAIL`, `RESET`
//! - **Context**: the items loaded so far, in source order
//! - **Invoke**: entering `fetching` starts a cancellable fetch task whose
//!   result comes back as `MORE` or `DONE`
//!
//! # Example
//!
//! ```rust
//! use pageflow::machine::{PageEvent, PageState, PaginationMachine};
//! use pageflow::source::{MockSource, PageSource};
//!
//! let source = MockSource::default();
//! let mut machine = PaginationMachine::new();
//!
//! while !machine.is_final() {
//!     machine.send(PageEvent::Fetch);
//!     let page = source.page(machine.context().len(), 10);
//!     machine.send(page.into_event());
//! }
//!
//! assert_eq!(machine.state(), PageState::Complete);
//! assert_eq!(machine.context().len(), 40);
//! ```

#[macro_use]
mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod machine;
pub mod runtime;
pub mod source;

pub use crate::config::{FailurePolicy, PagerConfig};
pub use crate::core::{Guard, State, StateHistory, StateTransition};
pub use error::{Error, Result};
pub use machine::{PageContext, PageEvent, PageState, PaginationMachine};
pub use runtime::{Footer, PaginationHandle, PaginationService, Snapshot};
