//! Core error types

use thiserror::Error;

/// Errors from parsing a textual color
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Input was empty or whitespace
    #[error("empty color string")]
    Empty,

    /// Input did not start with `#`
    #[error("color `{0}` must start with `#`")]
    MissingHash(String),

    /// Wrong number of hex digits (expected 6 or 8)
    #[error("expected 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),

    /// A non-hex character was found
    #[error("invalid hex digits `{0}`")]
    InvalidDigit(String),
}
