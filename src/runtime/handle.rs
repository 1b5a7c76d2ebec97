//! Host-side handle to a running [`PaginationService`](super::PaginationService).

use super::service::Command;
use super::snapshot::Snapshot;
use crate::core::Guard;
use crate::error::{Error, Result};
use crate::machine::{PageEvent, PageState};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::trace;

/// Cloneable handle used by hosts to send events and observe snapshots.
///
/// Events are delivered as-is; the machine ignores any it has no rule for.
#[derive(Clone, Debug)]
pub struct PaginationHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<Snapshot>,
    load_more: Arc<Guard<PageState>>,
}

impl PaginationHandle {
    pub(crate) fn new(
        commands: mpsc::UnboundedSender<Command>,
        snapshots: watch::Receiver<Snapshot>,
    ) -> Self {
        Self {
            commands,
            snapshots,
            load_more: Arc::new(Guard::labeled("load_more", |s: &PageState| {
                *s == PageState::More
            })),
        }
    }

    pub fn send(&self, event: PageEvent) -> Result<()> {
        self.commands
            .send(Command::Send(event))
            .map_err(|_| Error::ServiceStopped)
    }

    pub fn fetch(&self) -> Result<()> {
        self.send(PageEvent::Fetch)
    }

    /// `DONE` with no items, as sent by a "complete" button.
    pub fn complete(&self) -> Result<()> {
        self.send(PageEvent::Done { new_data: vec![] })
    }

    pub fn reset(&self) -> Result<()> {
        self.send(PageEvent::Reset)
    }

    /// Called when a list view scrolls past its end threshold. Sends
    /// `FETCH` only while the last snapshot says more items exist, and
    /// reports whether it did.
    pub fn end_reached(&self) -> Result<bool> {
        let state = self.snapshots.borrow().state;
        if !self.load_more.check(&state) {
            trace!(%state, guard = self.load_more.label(), "end reached, not loading");
            return Ok(false);
        }
        self.fetch()?;
        Ok(true)
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Wait until a published snapshot satisfies `predicate`. The current
    /// snapshot is checked first.
    pub async fn wait_until<F>(&self, predicate: F) -> Result<Snapshot>
    where
        F: FnMut(&Snapshot) -> bool,
    {
        let mut snapshots = self.snapshots.clone();
        let snapshot = snapshots
            .wait_for(predicate)
            .await
            .map_err(|_| Error::ServiceStopped)?;
        Ok(snapshot.clone())
    }

    pub async fn wait_for_state(&self, state: PageState) -> Result<Snapshot> {
        self.wait_until(|snapshot| snapshot.state == state).await
    }

    /// Ask the service to stop. In-flight fetches are cancelled.
    pub fn shutdown(&self) -> Result<()> {
        self.commands
            .send(Command::Shutdown)
            .map_err(|_| Error::ServiceStopped)
    }
}
