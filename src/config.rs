//! Pager configuration.
//!
//! Validation uses stillwater's `Validation` so a bad config reports every
//! problem at once instead of the first one found.

use crate::error::{Error, Result};
use crate::source::FaultPlan;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error as ThisError;

/// Upper bound on the simulated fetch delay.
pub const MAX_FETCH_DELAY_MS: u64 = 60_000;

/// What happens when the fetch effect fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Send `FAIL`, moving to the terminal `fail` state
    #[default]
    Terminal,
    /// Log and stay in `fetching`; only `RESET` or a host `MORE`/`DONE`
    /// moves on
    LogOnly,
}

#[derive(Debug, Clone, ThisError, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigViolation {
    #[error("page_size must be at least 1")]
    ZeroPageSize,

    #[error("fetch_delay_ms {delay_ms} exceeds maximum of {max_ms}")]
    DelayTooLong { delay_ms: u64, max_ms: u64 },

    #[error("fault offset {offset} is never fetched (page_size {page_size}, source_len {source_len})")]
    UnreachableFault {
        offset: usize,
        page_size: usize,
        source_len: usize,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Items per fetch
    pub page_size: usize,
    /// Length of the mock source
    pub source_len: usize,
    /// Simulated latency of every fetch
    pub fetch_delay_ms: u64,
    /// Send `FETCH` automatically whenever `idle` is entered
    pub auto_start: bool,
    pub failure_policy: FailurePolicy,
    pub faults: FaultPlan,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            source_len: 40,
            fetch_delay_ms: 500,
            auto_start: true,
            failure_policy: FailurePolicy::Terminal,
            faults: FaultPlan::Never,
        }
    }
}

impl PagerConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.ensure_valid()?;
        Ok(config)
    }

    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }

    /// Offsets the pager will fetch from a source of `source_len` items, in order.
    pub fn fetch_offsets(&self, source_len: usize) -> impl Iterator<Item = usize> {
        let step = self.page_size.max(1);
        (0..source_len.max(1)).step_by(step)
    }

    /// Check every rule against `source_len`, accumulating all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        self.validate_for(self.source_len)
    }

    /// Check every rule against a source of `source_len` items.
    ///
    /// Services built over a custom source validate against that source's
    /// length, not `source_len`.
    pub fn validate_for(&self, source_len: usize) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.page_size == 0 {
            Validation::fail(ConfigViolation::ZeroPageSize)
        } else {
            Validation::success(())
        });

        checks.push(if self.fetch_delay_ms > MAX_FETCH_DELAY_MS {
            Validation::fail(ConfigViolation::DelayTooLong {
                delay_ms: self.fetch_delay_ms,
                max_ms: MAX_FETCH_DELAY_MS,
            })
        } else {
            Validation::success(())
        });

        if let FaultPlan::AtOffset(offset) = self.faults {
            if self.page_size > 0 && !self.fetch_offsets(source_len).any(|o| o == offset) {
                checks.push(Validation::fail(ConfigViolation::UnreachableFault {
                    offset,
                    page_size: self.page_size,
                    source_len,
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// `validate`, folded into the crate error.
    pub fn ensure_valid(&self) -> Result<()> {
        self.ensure_valid_for(self.source_len)
    }

    /// `validate_for`, folded into the crate error.
    pub fn ensure_valid_for(&self, source_len: usize) -> Result<()> {
        match self.validate_for(source_len) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(Error::InvalidConfig {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }
}
