//! Error types for the search criteria engine.

use thiserror::Error;

/// Errors that can occur while parsing SEARCH criteria.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An atom had the wrong shape for its position.
    #[error("Type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        /// Shape the parser needed at this position.
        expected: &'static str,
        /// Shape actually found.
        found: &'static str,
    },

    /// A search key needs more arguments than remain in the input.
    #[error("Missing argument for {0}")]
    MissingArgument(&'static str),

    /// A token could not be parsed as a sequence set.
    #[error("Invalid sequence set: {0}")]
    InvalidSequenceSet(String),

    /// A token could not be parsed as an unsigned 32-bit number.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// A token did not match the `D-Mon-YYYY` search date format.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// NOT/OR nesting exceeded the configured maximum depth.
    #[error("Search criteria nested deeper than {0} levels")]
    NestingTooDeep(usize),

    /// Malformed SEARCH arguments on the wire.
    #[error("Syntax error at position {position}: {message}")]
    Syntax {
        /// Byte position where the error occurred.
        position: usize,
        /// Description of what went wrong.
        message: String,
    },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
