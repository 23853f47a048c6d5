//! Crate-level error types.

use std::fmt;

/// Errors produced by the tosscoin crate.
#[derive(Debug)]
pub enum TossError {
    /// An axis direction outside `{-1, 0, 1}`.
    InvalidAxisDirection {
        /// Axis name (`"x"`, `"y"` or `"z"`).
        axis: &'static str,
        /// The rejected value.
        value: i32,
    },
    /// A toss result other than `1` (front) or `-1` (reverse).
    InvalidOutcome(i32),
    /// A toss needs at least one full turn.
    InvalidCircleCount(u32),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for TossError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAxisDirection { axis, value } => write!(
                f,
                "invalid {axis} axis direction {value}: |direction| must be \
                 at most 1"
            ),
            Self::InvalidOutcome(value) => {
                write!(f, "invalid toss result {value}: |result| must be 1")
            }
            Self::InvalidCircleCount(count) => {
                write!(f, "invalid circle count {count}: must be at least 1")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for TossError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TossError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
