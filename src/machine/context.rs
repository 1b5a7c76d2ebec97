//! Machine context: the items loaded so far.

use serde::{Deserialize, Serialize};

/// Loaded items, in source order.
///
/// Append-only within a session; only a reset clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    data: Vec<String>,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &[String] {
        &self.data
    }

    /// Offset the next page starts at.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn append(&mut self, items: Vec<String>) {
        self.data.extend(items);
    }

    pub(crate) fn clear(&mut self) {
        self.data.clear();
    }
}
