//! Postcode error types

use thiserror::Error;

/// Errors that can occur while parsing a postcode
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostcodeError {
    /// Input is empty or matches neither the standard nor the BFPO grammar.
    /// Carries the input exactly as the caller supplied it.
    #[error("Invalid postcode format: '{0}' is invalid")]
    InvalidFormat(String),
}

impl PostcodeError {
    /// Creates an InvalidFormat error from the raw input
    pub fn invalid_format(input: impl Into<String>) -> Self {
        PostcodeError::InvalidFormat(input.into())
    }

    /// Returns the rejected input, before any normalization
    pub fn input(&self) -> &str {
        match self {
            PostcodeError::InvalidFormat(input) => input,
        }
    }
}
