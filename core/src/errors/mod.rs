//! Error types for header parsing.
//!
//! A failed selection is not an error: matchers return `None` and the host
//! decides on a default locale.

use thiserror::Error;

/// Reasons an `Accept-Language` header is rejected as a whole
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    #[error("Accept-Language header is missing")]
    MissingHeader,

    #[error("Malformed language range: {entry:?}")]
    MalformedRange { entry: String },

    #[error("Invalid language tag: {tag:?}")]
    InvalidTag { tag: String },
}

impl LanguageError {
    /// Check if the header was absent rather than broken
    pub fn is_missing(&self) -> bool {
        matches!(self, LanguageError::MissingHeader)
    }
}

pub type LanguageResult<T> = Result<T, LanguageError>;
