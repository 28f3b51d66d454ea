//! Entry errors.

use thiserror::Error;

/// Errors raised by the time entry buffer.
///
/// These are contract violations by the caller, never user-facing
/// conditions: overflowing entries are clamped and extra digits shift the
/// oldest one out.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("Invalid digit {0:?}, expected '0'..='9'")]
    InvalidArgument(char),

    #[error("Entry must be exactly 4 digits, got {0}")]
    InvalidLength(usize),
}
