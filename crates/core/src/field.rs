//! Field types: the typed values a content record carries
//!
//! Every field stores its value as a raw string; the `FieldKind` tag decides
//! how the projection layer interprets that string. Reference kinds carry an
//! optional pre-resolved target id; multi-value members are encoded in the
//! raw value as `|`-separated record ids; link fields carry a JSON-encoded
//! [`Link`] object.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::id::RecordId;

/// Type tag of a field, driving per-kind rendering
///
/// This is a closed set: anything outside it lands in `Other` with the
/// original type key preserved, and renders through the default rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Plain single- or multi-line text
    Text,
    /// Markup-bearing text; tags are stripped for display
    RichText,
    /// Date without a time component
    Date,
    /// Date with a time component
    DateTime,
    /// Single reference to another record
    Reference,
    /// Ordered list of references to other records
    MultiList,
    /// Hyperlink (internal, media, external, anchor, mailto, ...)
    Link,
    /// Unrecognized type key, kept verbatim
    Other(String),
}

impl FieldKind {
    /// Map a stored type key onto the closed kind set
    pub fn from_type_key(key: &str) -> FieldKind {
        match key.trim().to_ascii_lowercase().as_str() {
            "text" => FieldKind::Text,
            "rich text" | "richtext" => FieldKind::RichText,
            "date" => FieldKind::Date,
            "datetime" => FieldKind::DateTime,
            "reference" => FieldKind::Reference,
            "multilist" => FieldKind::MultiList,
            "link" => FieldKind::Link,
            other => FieldKind::Other(other.to_string()),
        }
    }

    /// The canonical type key for this kind
    pub fn type_key(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::RichText => "rich text",
            FieldKind::Date => "date",
            FieldKind::DateTime => "datetime",
            FieldKind::Reference => "reference",
            FieldKind::MultiList => "multilist",
            FieldKind::Link => "link",
            FieldKind::Other(key) => key,
        }
    }
}

/// One typed field on a content record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name, matched case-insensitively on lookup
    pub name: String,
    /// Type tag deciding the rendering rule
    pub kind: FieldKind,
    /// Raw stored value
    pub value: String,
    /// Pre-resolved target id for reference kinds
    pub target: Option<RecordId>,
}

impl Field {
    /// Create a field with no pre-resolved target
    pub fn new(name: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Field {
            name: name.into(),
            kind,
            value: value.into(),
            target: None,
        }
    }

    /// Attach a pre-resolved target id
    pub fn with_target(mut self, target: RecordId) -> Self {
        self.target = Some(target);
        self
    }

    /// Target id for single-reference resolution
    ///
    /// Prefers the pre-resolved target, falling back to parsing the raw
    /// value as a record id.
    pub fn target_id(&self) -> Option<RecordId> {
        self.target
            .or_else(|| RecordId::from_string(self.value.trim()))
    }

    /// Member ids of a multi-value field, in stored order
    ///
    /// The raw value encodes members as `|`-separated record ids; tokens
    /// that do not parse as ids are skipped.
    pub fn member_ids(&self) -> Vec<RecordId> {
        self.value
            .split('|')
            .filter_map(|token| RecordId::from_string(token.trim()))
            .collect()
    }
}

/// Kind of a hyperlink field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Link to another content record
    Internal,
    /// Link to a media record
    Media,
    /// Absolute external URL
    External,
    /// In-page anchor
    Anchor,
    /// mailto: address
    Mailto,
    /// javascript: pseudo-link
    Javascript,
    /// Anything else
    #[default]
    #[serde(other)]
    Other,
}

/// Decoded hyperlink field value
///
/// Link fields store a JSON object in the raw field value, e.g.
/// `{"kind":"internal","url":"/docs/intro","target":"<uuid>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Link {
    /// Link kind, `Other` when absent
    #[serde(default)]
    pub kind: LinkKind,
    /// Underlying URL or path
    #[serde(default)]
    pub url: String,
    /// Display text
    #[serde(default)]
    pub text: String,
    /// In-page anchor, if any
    #[serde(default)]
    pub anchor: String,
    /// Target record for internal/media kinds
    #[serde(default)]
    pub target: Option<RecordId>,
}

impl Link {
    /// Decode a link from a raw field value
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedLink`] when the value is not a valid link
    /// object; callers fall back to the default rendering rule.
    pub fn parse(value: &str) -> Result<Link> {
        serde_json::from_str(value).map_err(|err| Error::MalformedLink {
            reason: err.to_string(),
        })
    }
}
