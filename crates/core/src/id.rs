//! Record identity types
//!
//! - `RecordId`: opaque identity of a logical record, shared by every
//!   language variant and version of that record.
//! - `RecordUri`: canonical address of one concrete record instance
//!   (id + language + version). This is the value token carried by an
//!   output row.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::Error;
use crate::version::VersionNumber;

/// Unique identifier for a logical content record
///
/// A RecordId is a wrapper around a UUID v4. All language variants and
/// versions of the same logical record share one RecordId.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Create a new random RecordId using UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a RecordId from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Parse a RecordId from a string representation
    ///
    /// Accepts standard UUID format (with or without hyphens).
    /// Returns None if the string is not a valid UUID.
    pub fn from_string(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }

    /// Get the raw bytes of this RecordId
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical address of one record instance
///
/// Format: `record://<id>?lang=<tag>&ver=<n>`
///
/// The URI pins a record to a specific language and version, so two
/// instances of the same logical record never share a URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordUri {
    /// Logical record identity
    pub id: RecordId,
    /// Normalized language tag (e.g. "en", "da")
    pub language: String,
    /// Version of the record instance
    pub version: VersionNumber,
}

impl RecordUri {
    /// Create a record URI from its parts
    pub fn new(id: RecordId, language: impl Into<String>, version: VersionNumber) -> Self {
        Self {
            id,
            language: language.into(),
            version,
        }
    }
}

impl fmt::Display for RecordUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "record://{}?lang={}&ver={}",
            self.id, self.language, self.version
        )
    }
}

impl FromStr for RecordUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedUri { raw: s.to_string() };

        let rest = s.strip_prefix("record://").ok_or_else(malformed)?;
        let (id_part, query) = rest.split_once('?').ok_or_else(malformed)?;
        let id = RecordId::from_string(id_part).ok_or_else(malformed)?;

        let mut language = None;
        let mut version = None;
        for pair in query.split('&') {
            match pair.split_once('=') {
                Some(("lang", value)) if !value.is_empty() => {
                    language = Some(value.to_ascii_lowercase());
                }
                Some(("ver", value)) => {
                    version = Some(value.parse::<VersionNumber>().map_err(|_| malformed())?);
                }
                _ => {}
            }
        }

        Ok(RecordUri {
            id,
            language: language.ok_or_else(malformed)?,
            version: version.ok_or_else(malformed)?,
        })
    }
}
