//! Errors surfaced by the crate.
//!
//! Flag operations themselves are total; only text parsing can fail.

use core::fmt;

/// Error returned when a string is not a recognised flag literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFlagError {
    input: String,
}

impl ParseFlagError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The rejected input, as given to the parser.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseFlagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid flag literal `{}`, expected `true` or `false`",
            self.input
        )
    }
}

impl std::error::Error for ParseFlagError {}
