//! # Error Types
//!
//! Errors raised while parsing core vocabulary from untrusted input
//! (CLI flags, query strings, catalog files). All use `thiserror`.

use thiserror::Error;

/// Top-level error type for `aiact-core`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Language code other than `ko` or `en`.
    #[error("unsupported language {0:?}; expected \"ko\" or \"en\"")]
    UnsupportedLanguage(String),

    /// Timestamp that is not valid RFC 3339.
    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },
}
