//! The event loop hosting a [`PaginationMachine`].
//!
//! One tokio task owns the machine and drains a single command queue, so
//! transitions never interleave. Entering `fetching` spawns a fetch task
//! that sleeps for the configured delay, runs [`fetch_page`] and posts the
//! result back to the queue tagged with its invocation id. Leaving
//! `fetching` aborts that task. A result whose id is no longer current is
//! dropped, so a `RESET` can never be followed by a stale append.

use super::handle::PaginationHandle;
use super::snapshot::Snapshot;
use crate::config::{FailurePolicy, PagerConfig};
use crate::error::Result;
use crate::machine::{
    EventKind, PageEvent, PageState, PaginationMachine, SendOutcome, TransitionTable,
};
use crate::source::{fetch_page, FetchEnv, FetchError, MockSource, PageSource};
use std::sync::Arc;
use std::time::Duration;
use stillwater::effect::Effect;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Debug)]
pub(crate) enum Command {
    Send(PageEvent),
    Resolved {
        id: Uuid,
        result: std::result::Result<PageEvent, FetchError>,
    },
    Shutdown,
}

#[derive(Debug)]
struct InFlight {
    id: Uuid,
    offset: usize,
    task: JoinHandle<()>,
}

pub struct PaginationService {
    machine: PaginationMachine,
    env: FetchEnv,
    fetch_delay: Duration,
    auto_start: bool,
    failure_policy: FailurePolicy,
    inbox: mpsc::UnboundedReceiver<Command>,
    outbox: mpsc::WeakUnboundedSender<Command>,
    snapshots: watch::Sender<Snapshot>,
    in_flight: Option<InFlight>,
    invocations: u64,
}

impl PaginationService {
    /// Service over a [`MockSource`] sized by the config.
    pub fn new(config: PagerConfig) -> Result<(Self, PaginationHandle)> {
        let source = Arc::new(MockSource::new(config.source_len));
        Self::with_source(config, source)
    }

    /// Service over any source.
    ///
    /// `config.source_len` is ignored; fault offsets are validated against
    /// `source.len()`.
    pub fn with_source(
        config: PagerConfig,
        source: Arc<dyn PageSource>,
    ) -> Result<(Self, PaginationHandle)> {
        Self::with_table(config, source, TransitionTable::pagination())
    }

    pub fn with_table(
        config: PagerConfig,
        source: Arc<dyn PageSource>,
        table: TransitionTable,
    ) -> Result<(Self, PaginationHandle)> {
        config.ensure_valid_for(source.len())?;

        let machine = PaginationMachine::with_table(table);
        let (commands, inbox) = mpsc::unbounded_channel();
        let (snapshots, snapshot_rx) = watch::channel(Snapshot::capture(&machine, 0));

        let service = Self {
            machine,
            env: FetchEnv::new(source, config.page_size).with_faults(config.faults),
            fetch_delay: config.fetch_delay(),
            auto_start: config.auto_start,
            failure_policy: config.failure_policy,
            inbox,
            outbox: commands.downgrade(),
            snapshots,
            in_flight: None,
            invocations: 0,
        };
        let handle = PaginationHandle::new(commands, snapshot_rx);

        Ok((service, handle))
    }

    /// Build the service and run it on the current tokio runtime.
    pub fn spawn(config: PagerConfig) -> Result<(PaginationHandle, JoinHandle<Snapshot>)> {
        let (service, handle) = Self::new(config)?;
        Ok((handle, tokio::spawn(service.run())))
    }

    pub fn machine(&self) -> &PaginationMachine {
        &self.machine
    }

    /// Process commands until shutdown or until every handle is dropped.
    /// Returns the final snapshot.
    pub async fn run(mut self) -> Snapshot {
        info!(
            page_size = self.env.page_size,
            source_len = self.env.source.len(),
            auto_start = self.auto_start,
            "pagination service started"
        );

        self.enter(self.machine.state());
        self.publish();

        while let Some(command) = self.inbox.recv().await {
            match command {
                Command::Send(event) => self.dispatch(event),
                Command::Resolved { id, result } => self.resolve(id, result),
                Command::Shutdown => break,
            }
            self.publish();
        }

        self.cancel_fetch();
        let snapshot = self.snapshot();
        self.snapshots.send_replace(snapshot.clone());
        info!(state = %snapshot.state, items = snapshot.data.len(), "pagination service stopped");
        snapshot
    }

    fn dispatch(&mut self, event: PageEvent) {
        if let SendOutcome::Transitioned { from, to } = self.machine.send(event) {
            self.exit(from);
            self.enter(to);
        }
    }

    fn exit(&mut self, state: PageState) {
        if state == PageState::Fetching {
            self.cancel_fetch();
        }
    }

    fn enter(&mut self, state: PageState) {
        match state {
            PageState::Fetching => self.start_fetch(),
            PageState::Idle if self.auto_start => {
                let restarts = self
                    .machine
                    .table()
                    .lookup(PageState::Idle, EventKind::Fetch)
                    .is_some_and(|rule| rule.to != PageState::Idle);
                if restarts && self.outbox.upgrade().is_some() {
                    self.dispatch(PageEvent::Fetch);
                }
            }
            _ => {}
        }
    }

    fn start_fetch(&mut self) {
        let Some(outbox) = self.outbox.upgrade() else {
            warn!("no handles left, failing fetch instead of starting it");
            let leaves_fetching = self
                .machine
                .table()
                .lookup(PageState::Fetching, EventKind::Fail)
                .is_some_and(|rule| rule.to != PageState::Fetching);
            if leaves_fetching {
                self.dispatch(PageEvent::fail("pagination service has no handles"));
            }
            return;
        };

        let id = Uuid::new_v4();
        let offset = self.machine.context().len();
        let env = self.env.clone();
        let delay = self.fetch_delay;

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let result = fetch_page(offset).run(&env).await;
            if outbox.send(Command::Resolved { id, result }).is_err() {
                debug!(%id, "service gone before fetch resolved");
            }
        });

        self.invocations += 1;
        debug!(%id, offset, "fetch started");
        self.in_flight = Some(InFlight { id, offset, task });
    }

    fn cancel_fetch(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.task.abort();
            debug!(id = %in_flight.id, offset = in_flight.offset, "fetch cancelled");
        }
    }

    fn resolve(&mut self, id: Uuid, result: std::result::Result<PageEvent, FetchError>) {
        match &self.in_flight {
            Some(in_flight) if in_flight.id == id => {
                self.in_flight = None;
            }
            _ => {
                warn!(%id, "discarding stale fetch result");
                return;
            }
        }

        match result {
            Ok(event) => self.dispatch(event),
            Err(err) => match self.failure_policy {
                FailurePolicy::Terminal => {
                    warn!(error = %err, "fetch failed");
                    self.dispatch(PageEvent::fail(err.to_string()));
                }
                FailurePolicy::LogOnly => {
                    warn!(error = %err, "fetch failed, staying in fetching");
                }
            },
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.machine, self.invocations)
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.snapshot());
    }
}
