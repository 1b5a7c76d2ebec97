//! The fetch effect run on entry to `fetching`.

use super::{MockSource, PageSource};
use crate::machine::PageEvent;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Injected fetch failure at offset {offset}")]
    Injected { offset: usize },
}

/// When the fetch effect should fail instead of slicing the source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "offset", rename_all = "snake_case")]
pub enum FaultPlan {
    #[default]
    Never,
    Always,
    /// Fail only the fetch that starts at this offset
    AtOffset(usize),
}

impl FaultPlan {
    pub fn trips_at(&self, offset: usize) -> bool {
        match self {
            Self::Never => false,
            Self::Always => true,
            Self::AtOffset(at) => *at == offset,
        }
    }
}

/// Everything the fetch effect reads.
#[derive(Clone, Debug)]
pub struct FetchEnv {
    pub source: Arc<dyn PageSource>,
    pub page_size: usize,
    pub faults: FaultPlan,
}

impl FetchEnv {
    pub fn new(source: Arc<dyn PageSource>, page_size: usize) -> Self {
        Self {
            source,
            page_size,
            faults: FaultPlan::Never,
        }
    }

    pub fn with_faults(mut self, faults: FaultPlan) -> Self {
        self.faults = faults;
        self
    }
}

impl Default for FetchEnv {
    fn default() -> Self {
        Self::new(Arc::new(MockSource::default()), 10)
    }
}

/// Load the page starting at `offset` and turn it into the completion
/// event: `MORE` while items remain, `DONE` for the final slice.
pub fn fetch_page(offset: usize) -> BoxedEffect<PageEvent, FetchError, FetchEnv> {
    from_fn(move |env: &FetchEnv| {
        if env.faults.trips_at(offset) {
            return Err(FetchError::Injected { offset });
        }
        Ok(env.source.page(offset, env.page_size).into_event())
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::EventKind;
    use stillwater::effect::Effect;

    #[tokio::test]
    async fn first_fetch_returns_first_page() {
        let env = FetchEnv::default();
        let event = fetch_page(0).run(&env).await.unwrap();

        let expected: Vec<String> = (1..=10).map(|i| i.to_string()).collect();
        assert_eq!(event, PageEvent::More { new_data: expected });
    }

    #[tokio::test]
    async fn final_fetch_returns_done() {
        let env = FetchEnv::default();
        let event = fetch_page(30).run(&env).await.unwrap();

        assert_eq!(event.kind(), EventKind::Done);
        assert_eq!(event.payload().len(), 10);
    }

    #[tokio::test]
    async fn fault_at_offset_fails_only_that_fetch() {
        let env = FetchEnv::default().with_faults(FaultPlan::AtOffset(20));

        assert!(fetch_page(10).run(&env).await.is_ok());
        assert_eq!(
            fetch_page(20).run(&env).await.unwrap_err(),
            FetchError::Injected { offset: 20 }
        );
    }

    #[tokio::test]
    async fn page_size_comes_from_env() {
        let env = FetchEnv::new(Arc::new(MockSource::new(7)), 3);
        let event = fetch_page(6).run(&env).await.unwrap();

        assert_eq!(event, PageEvent::done(["7"]));
    }

    #[test]
    fn fault_plan_serialises_with_mode_tag() {
        assert_eq!(
            serde_json::to_string(&FaultPlan::AtOffset(20)).unwrap(),
            r#"{"mode":"at_offset","offset":20}"#
        );
        let never: FaultPlan = serde_json::from_str(r#"{"mode":"never"}"#).unwrap();
        assert_eq!(never, FaultPlan::Never);
    }
}
