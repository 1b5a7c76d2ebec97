//! The transition table.
//!
//! One row per `(state, event kind)` pair. A missing row means the event is
//! ignored in that state.

use super::builder::{RuleBuilder, TransitionTableBuilder};
use super::context::PageContext;
use super::event::{EventKind, PageEvent};
use super::state::PageState;
use serde::{Deserialize, Serialize};

/// What a rule does to the context while transitioning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextAction {
    #[default]
    Keep,
    /// Append the event payload
    Append,
    /// Drop all loaded items
    Clear,
}

impl ContextAction {
    pub(crate) fn apply(self, context: &mut PageContext, event: PageEvent) {
        match self {
            Self::Keep => {}
            Self::Append => context.append(event.into_payload()),
            Self::Clear => context.clear(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRule {
    pub from: PageState,
    pub on: EventKind,
    pub to: PageState,
    pub action: ContextAction,
}

/// Validated set of rules. Build custom tables with
/// [`TransitionTableBuilder`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransitionTable {
    rules: Vec<TransitionRule>,
}

impl TransitionTable {
    pub(crate) fn from_rules(rules: Vec<TransitionRule>) -> Self {
        Self { rules }
    }

    /// The pagination table:
    ///
    /// | state    | event | target   | action |
    /// |----------|-------|----------|--------|
    /// | idle     | FETCH | fetching |        |
    /// | fetching | MORE  | more     | append |
    /// | fetching | DONE  | complete | append |
    /// | fetching | RESET | idle     | clear  |
    /// | fetching | FAIL  | fail     |        |
    /// | more     | FETCH | fetching |        |
    pub fn pagination() -> Self {
        let rule = |from: PageState, on: EventKind, to: PageState| {
            RuleBuilder::new().from(from).on(on).to(to)
        };

        TransitionTableBuilder::new()
            .add_rule(rule(PageState::Idle, EventKind::Fetch, PageState::Fetching))
            .add_rule(rule(PageState::Fetching, EventKind::More, PageState::More).appends())
            .add_rule(rule(PageState::Fetching, EventKind::Done, PageState::Complete).appends())
            .add_rule(rule(PageState::Fetching, EventKind::Reset, PageState::Idle).clears())
            .add_rule(rule(PageState::Fetching, EventKind::Fail, PageState::Fail))
            .add_rule(rule(PageState::More, EventKind::Fetch, PageState::Fetching))
            .build()
            .expect("Pagination table should always build")
    }

    pub fn lookup(&self, state: PageState, event: EventKind) -> Option<&TransitionRule> {
        self.rules
            .iter()
            .find(|rule| rule.from == state && rule.on == event)
    }

    /// Event kinds `state` reacts to.
    pub fn accepted(&self, state: PageState) -> Vec<EventKind> {
        self.rules
            .iter()
            .filter(|rule| rule.from == state)
            .map(|rule| rule.on)
            .collect()
    }

    pub fn rules(&self) -> &[TransitionRule] {
        &self.rules
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::pagination()
    }
}
