//! In-memory source used by the demo and tests.

use super::PageSource;
use std::sync::Arc;

/// Default number of items, `"1"` through `"40"`.
pub const DEFAULT_SOURCE_LEN: usize = 40;

/// Immutable list of items, cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockSource {
    items: Arc<[String]>,
}

impl MockSource {
    /// Items `"1"` through `"{len}"`.
    pub fn new(len: usize) -> Self {
        Self::from_items((1..=len).map(|i| i.to_string()))
    }

    pub fn from_items<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_LEN)
    }
}

impl PageSource for MockSource {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn slice(&self, offset: usize, limit: usize) -> Vec<String> {
        self.items.iter().skip(offset).take(limit).cloned().collect()
    }
}
