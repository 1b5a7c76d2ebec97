//! What hosts render.

use crate::machine::{PageState, PaginationMachine};
use serde::{Deserialize, Serialize};

/// Text shown under the list when the source is exhausted.
pub const END_OF_LIST_MESSAGE: &str = "No more content to load";

/// Footer a list host shows below the loaded items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Footer {
    None,
    /// Activity indicator
    Loading,
    EndOfList,
    Error,
}

impl Footer {
    pub fn for_state(state: PageState) -> Self {
        match state {
            PageState::Fetching => Self::Loading,
            PageState::Complete => Self::EndOfList,
            PageState::Fail => Self::Error,
            PageState::Idle | PageState::More => Self::None,
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::EndOfList => Some(END_OF_LIST_MESSAGE),
            Self::Error => Some("Failed to load content"),
            Self::None | Self::Loading => None,
        }
    }
}

/// Published after every command the service processes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: PageState,
    pub data: Vec<String>,
    pub footer: Footer,
    /// Fetch tasks started so far
    pub invocations: u64,
}

impl Snapshot {
    pub(crate) fn capture(machine: &PaginationMachine, invocations: u64) -> Self {
        let state = machine.state();
        Self {
            state,
            data: machine.context().data().to_vec(),
            footer: Footer::for_state(state),
            invocations,
        }
    }

    pub fn matches(&self, state: PageState) -> bool {
        self.state == state
    }

    /// Whether an end-of-list signal should ask for another page.
    pub fn can_load_more(&self) -> bool {
        self.state == PageState::More
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::capture(&PaginationMachine::new(), 0)
    }
}
