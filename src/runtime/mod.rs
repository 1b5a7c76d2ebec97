//! Async shell around the pure machine.
//!
//! [`PaginationService`] runs the machine on a tokio task and owns the fetch
//! task started on entry to `fetching`. Hosts talk to it through a
//! [`PaginationHandle`] and render [`Snapshot`]s.

mod handle;
mod service;
mod snapshot;

pub use handle::PaginationHandle;
pub use service::PaginationService;
pub use snapshot::{Footer, Snapshot, END_OF_LIST_MESSAGE};
