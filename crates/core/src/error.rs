//! Error types for Tabula
//!
//! The projection layer degrades gracefully on resolution misses, so errors
//! here only surface at the parsing seams (language tags, version numbers,
//! record URIs, link values). We use `thiserror` for the `Display` and
//! `Error` trait implementations.

use thiserror::Error;

/// Result type alias for Tabula operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the parsing seams of the content model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Language tag not present in the language registry
    #[error("unknown language: {code}")]
    UnknownLanguage {
        /// The tag that failed to parse
        code: String,
    },

    /// Version numbers are 1-based positive integers
    #[error("invalid version number: {raw}")]
    InvalidVersionNumber {
        /// The rejected token
        raw: String,
    },

    /// Record URI did not match `record://<id>?lang=<tag>&ver=<n>`
    #[error("malformed record uri: {raw}")]
    MalformedUri {
        /// The rejected input
        raw: String,
    },

    /// Link field value was not a valid link object
    #[error("malformed link value: {reason}")]
    MalformedLink {
        /// Decoder message
        reason: String,
    },
}
