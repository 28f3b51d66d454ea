//! Configuration errors.

use thiserror::Error;

/// Lowest accepted tick length in milliseconds.
pub const MIN_TICK_MILLIS: u64 = 1;

/// Highest accepted tick length in milliseconds.
pub const MAX_TICK_MILLIS: u64 = 60_000;

/// A single configuration rule that did not hold.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("tick_millis must be within 1..=60000 (got {0})")]
    TickOutOfRange(u64),

    #[error("history_limit must be at least 1")]
    EmptyHistory,
}

/// Errors that can occur when loading panel configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {}", format_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
