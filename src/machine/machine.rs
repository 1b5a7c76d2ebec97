//! The pure pagination machine.
//!
//! No timers, no tasks: `send` looks up a rule, applies it, and reports what
//! happened. Starting fetches on entry to `fetching` is the runtime's job.

use super::context::PageContext;
use super::event::{EventKind, PageEvent};
use super::state::PageState;
use super::table::TransitionTable;
use crate::core::{State, StateHistory, StateTransition};
use chrono::Utc;
use tracing::{debug, trace};

/// Transitions a machine remembers; older ones are dropped first.
pub const HISTORY_LIMIT: usize = 256;

/// What `send` did with an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    Transitioned { from: PageState, to: PageState },
    /// No rule for this event in this state; nothing changed
    Ignored { state: PageState, event: EventKind },
}

impl SendOutcome {
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }

    /// State entered, if the event was accepted.
    pub fn entered(&self) -> Option<PageState> {
        match self {
            Self::Transitioned { to, .. } => Some(*to),
            Self::Ignored { .. } => None,
        }
    }
}

/// Current state, loaded items and history of one pagination session.
///
/// # Example
///
/// ```rust
/// use pageflow::machine::{PageEvent, PageState, PaginationMachine};
///
/// let mut machine = PaginationMachine::new();
/// machine.send(PageEvent::Fetch);
/// machine.send(PageEvent::more(["1", "2"]));
///
/// assert_eq!(machine.state(), PageState::More);
/// assert_eq!(machine.context().data(), ["1", "2"]);
/// ```
#[derive(Clone, Debug)]
pub struct PaginationMachine {
    current: PageState,
    context: PageContext,
    table: TransitionTable,
    history: StateHistory<PageState>,
}

impl PaginationMachine {
    pub fn new() -> Self {
        Self::with_table(TransitionTable::pagination())
    }

    pub fn with_table(table: TransitionTable) -> Self {
        Self {
            current: PageState::Idle,
            context: PageContext::new(),
            table,
            history: StateHistory::new(),
        }
    }

    pub fn state(&self) -> PageState {
        self.current
    }

    pub fn context(&self) -> &PageContext {
        &self.context
    }

    pub fn matches(&self, state: PageState) -> bool {
        self.current == state
    }

    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    pub fn history(&self) -> &StateHistory<PageState> {
        &self.history
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Whether `event` would be accepted right now.
    pub fn can(&self, event: EventKind) -> bool {
        self.table.lookup(self.current, event).is_some()
    }

    /// Deliver one event.
    pub fn send(&mut self, event: PageEvent) -> SendOutcome {
        let kind = event.kind();
        let Some(rule) = self.table.lookup(self.current, kind) else {
            trace!(state = %self.current, event = %kind, "event ignored");
            return SendOutcome::Ignored {
                state: self.current,
                event: kind,
            };
        };
        let (from, to, action) = (rule.from, rule.to, rule.action);

        action.apply(&mut self.context, event);
        let transition = StateTransition {
            from,
            to,
            event: kind.to_string(),
            timestamp: Utc::now(),
        };
        self.history = std::mem::take(&mut self.history).record_bounded(transition, HISTORY_LIMIT);
        self.current = to;

        debug!(%from, %to, event = %kind, items = self.context.len(), "transition");
        SendOutcome::Transitioned { from, to }
    }
}

impl Default for PaginationMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{MockSource, PageSource};

    fn page(source: &MockSource, machine: &PaginationMachine) -> PageEvent {
        source.page(machine.context().len(), 10).into_event()
    }

    #[test]
    fn starts_idle_and_empty() {
        let machine = PaginationMachine::new();
        assert_eq!(machine.state(), PageState::Idle);
        assert!(machine.context().is_empty());
        assert!(machine.history().is_empty());
    }

    #[test]
    fn fetch_moves_idle_to_fetching() {
        let mut machine = PaginationMachine::new();
        let outcome = machine.send(PageEvent::Fetch);

        assert_eq!(
            outcome,
            SendOutcome::Transitioned {
                from: PageState::Idle,
                to: PageState::Fetching
            }
        );
        assert!(machine.matches(PageState::Fetching));
    }

    #[test]
    fn first_page_leaves_more() {
        let source = MockSource::default();
        let mut machine = PaginationMachine::new();
        machine.send(PageEvent::Fetch);
        let event = page(&source, &machine);
        machine.send(event);

        assert_eq!(machine.state(), PageState::More);
        let expected: Vec<String> = (1..=10).map(|i| i.to_string()).collect();
        assert_eq!(machine.context().data(), expected.as_slice());
    }

    #[test]
    fn four_pages_exhaust_the_source() {
        let source = MockSource::default();
        let mut machine = PaginationMachine::new();

        for _ in 0..4 {
            assert!(machine.send(PageEvent::Fetch).is_transition());
            let event = page(&source, &machine);
            machine.send(event);
        }

        assert_eq!(machine.state(), PageState::Complete);
        assert_eq!(machine.context().len(), 40);
        assert_eq!(machine.context().data().last().map(String::as_str), Some("40"));
        assert_eq!(machine.history().entries_into(&PageState::Fetching), 4);
    }

    #[test]
    fn fetch_while_fetching_is_ignored() {
        let mut machine = PaginationMachine::new();
        machine.send(PageEvent::Fetch);
        let history_len = machine.history().len();

        let outcome = machine.send(PageEvent::Fetch);

        assert_eq!(
            outcome,
            SendOutcome::Ignored {
                state: PageState::Fetching,
                event: EventKind::Fetch
            }
        );
        assert_eq!(machine.history().len(), history_len);
    }

    #[test]
    fn reset_while_fetching_clears_data() {
        let mut machine = PaginationMachine::new();
        machine.send(PageEvent::Fetch);
        machine.send(PageEvent::more(["1", "2"]));
        machine.send(PageEvent::Fetch);

        machine.send(PageEvent::Reset);

        assert_eq!(machine.state(), PageState::Idle);
        assert!(machine.context().is_empty());
    }

    #[test]
    fn reset_outside_fetching_is_ignored() {
        let mut machine = PaginationMachine::new();
        machine.send(PageEvent::Fetch);
        machine.send(PageEvent::more(["1"]));

        assert!(!machine.send(PageEvent::Reset).is_transition());
        assert_eq!(machine.state(), PageState::More);
        assert_eq!(machine.context().len(), 1);
    }

    #[test]
    fn history_is_capped_across_reset_cycles() {
        let mut machine = PaginationMachine::new();
        for _ in 0..HISTORY_LIMIT {
            machine.send(PageEvent::Fetch);
            machine.send(PageEvent::Reset);
        }
        machine.send(PageEvent::Fetch);

        assert_eq!(machine.history().len(), HISTORY_LIMIT);
        assert_eq!(
            machine.history().last().map(|t| t.to),
            Some(PageState::Fetching)
        );
        assert_eq!(machine.history().transitions()[0].event, "RESET");
    }

    #[test]
    fn fail_is_terminal_and_keeps_data() {
        let mut machine = PaginationMachine::new();
        machine.send(PageEvent::Fetch);
        machine.send(PageEvent::more(["1"]));
        machine.send(PageEvent::Fetch);
        machine.send(PageEvent::fail("boom"));

        assert!(machine.is_final());
        assert_eq!(machine.context().data(), ["1"]);

        for event in [
            PageEvent::Fetch,
            PageEvent::Reset,
            PageEvent::more(["x"]),
            PageEvent::done(["y"]),
        ] {
            assert!(!machine.send(event).is_transition());
        }
        assert_eq!(machine.state(), PageState::Fail);
        assert_eq!(machine.context().data(), ["1"]);
    }

    #[test]
    fn host_done_completes_with_empty_payload() {
        let mut machine = PaginationMachine::new();
        machine.send(PageEvent::Fetch);
        machine.send(PageEvent::done(Vec::<String>::new()));

        assert_eq!(machine.state(), PageState::Complete);
        assert!(machine.context().is_empty());
    }

    #[test]
    fn can_reports_accepted_events() {
        let mut machine = PaginationMachine::new();
        assert!(machine.can(EventKind::Fetch));
        assert!(!machine.can(EventKind::More));

        machine.send(PageEvent::Fetch);
        assert!(!machine.can(EventKind::Fetch));
        assert!(machine.can(EventKind::Reset));
    }
}
