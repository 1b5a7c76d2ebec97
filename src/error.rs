//! Crate-level error type.

use crate::config::ConfigViolation;
use crate::machine::BuildError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {}", join(.violations))]
    InvalidConfig { violations: Vec<ConfigViolation> },

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Failed to build transition table: {0}")]
    Build(#[from] BuildError),

    #[error("Pagination service has stopped")]
    ServiceStopped,
}

pub type Result<T> = std::result::Result<T, Error>;

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
