//! Where pages come from.
//!
//! A [`PageSource`] is a fixed, ordered list of items. [`fetch_page`] wraps
//! one slice of it in an effect so the runtime can run it after the
//! simulated network delay, with faults injected from the environment.

mod fetch;
mod mock;

pub use fetch::{fetch_page, FaultPlan, FetchEnv, FetchError};
pub use mock::MockSource;

use crate::machine::PageEvent;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A fixed, ordered sequence of items.
pub trait PageSource: Debug + Send + Sync {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Up to `limit` items starting at `offset`. Past the end this is empty.
    fn slice(&self, offset: usize, limit: usize) -> Vec<String>;

    /// Slice and decide whether anything remains after it.
    fn page(&self, offset: usize, limit: usize) -> Page {
        let items = self.slice(offset, limit);
        let has_more = self.len() > offset + items.len();
        Page {
            offset,
            items,
            has_more,
        }
    }
}

/// One loaded slice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub offset: usize,
    pub items: Vec<String>,
    pub has_more: bool,
}

impl Page {
    /// `MORE` when items remain after this page, `DONE` otherwise.
    pub fn into_event(self) -> PageEvent {
        if self.has_more {
            PageEvent::More {
                new_data: self.items,
            }
        } else {
            PageEvent::Done {
                new_data: self.items,
            }
        }
    }
}
