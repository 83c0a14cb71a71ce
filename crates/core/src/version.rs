//! Version number type
//!
//! Record versions are 1-based: a record that exists has at least version 1,
//! and version numbers only grow. The type enforces the lower bound at
//! construction so downstream code never sees a zero version.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// 1-based version number of a record instance
///
/// ## Invariants
///
/// - The wrapped value is always >= 1
/// - `previous()` returns None at version 1 instead of underflowing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VersionNumber(u32);

impl VersionNumber {
    /// The first version every record starts at
    pub const FIRST: VersionNumber = VersionNumber(1);

    /// Create a version number, rejecting zero
    pub const fn new(number: u32) -> Option<Self> {
        if number == 0 {
            None
        } else {
            Some(VersionNumber(number))
        }
    }

    /// Get the numeric value
    #[inline]
    pub const fn number(&self) -> u32 {
        self.0
    }

    /// The version after this one
    pub const fn next(&self) -> Self {
        VersionNumber(self.0.saturating_add(1))
    }

    /// The version before this one, or None at version 1
    pub const fn previous(&self) -> Option<Self> {
        if self.0 > 1 {
            Some(VersionNumber(self.0 - 1))
        } else {
            None
        }
    }

    /// Check whether this is the first version
    #[inline]
    pub const fn is_first(&self) -> bool {
        self.0 == 1
    }
}

impl Default for VersionNumber {
    fn default() -> Self {
        VersionNumber::FIRST
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VersionNumber {
    type Err = Error;

    /// Parse a version number token, rejecting zero and non-numeric input
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .ok()
            .and_then(VersionNumber::new)
            .ok_or_else(|| Error::InvalidVersionNumber { raw: s.to_string() })
    }
}
