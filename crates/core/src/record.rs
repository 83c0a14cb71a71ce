//! ContentRecord: one language/version instance of a content record
//!
//! A `ContentRecord` is a read-only projection of a record as stored: its
//! identity, display metadata, typed fields, and the relations the display
//! layer needs (lock, clone source, workflow assignment). Instances are
//! constructed fresh per display call and never mutated by the projection
//! layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::id::{RecordId, RecordUri};
use crate::language::Language;
use crate::version::VersionNumber;
use crate::workflow::WorkflowAssignment;

/// Edit lock on a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lock {
    /// User holding the lock
    pub owner: String,
    /// When the lock was taken
    pub at: DateTime<Utc>,
}

/// Creation/update statistics of a record instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordStat {
    /// When the record was created
    pub created: Option<DateTime<Utc>>,
    /// User who created the record
    pub created_by: String,
    /// When the record was last updated
    pub updated: Option<DateTime<Utc>>,
    /// User who last updated the record
    pub updated_by: String,
    /// Owning user
    pub owner: String,
}

/// One language/version instance of a content record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Logical record identity, shared across languages and versions
    pub id: RecordId,
    /// Record name
    pub name: String,
    /// Display name, may differ from the name
    pub display_name: String,
    /// Language of this instance
    pub language: Language,
    /// Version of this instance
    pub version: VersionNumber,
    /// Full path from the content root
    pub path: String,
    /// Template the record was created from
    pub template: String,
    /// Icon reference for row display
    pub icon: String,
    /// Number of child records
    pub child_count: u32,
    /// Edit lock, if held
    pub lock: Option<Lock>,
    /// Source record this one was cloned from
    pub clone_of: Option<RecordId>,
    /// Whether clones of this record exist
    pub has_clones: bool,
    /// Attached workflow, if any
    pub workflow: Option<WorkflowAssignment>,
    /// Creation/update statistics
    pub stat: RecordStat,
    /// Ordered typed fields
    pub fields: Vec<Field>,
}

impl ContentRecord {
    /// Create a minimal record; remaining properties start empty
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        language: Language,
        version: VersionNumber,
    ) -> Self {
        let name = name.into();
        ContentRecord {
            id,
            display_name: name.clone(),
            name,
            language,
            version,
            path: String::new(),
            template: String::new(),
            icon: String::new(),
            child_count: 0,
            lock: None,
            clone_of: None,
            has_clones: false,
            workflow: None,
            stat: RecordStat::default(),
            fields: Vec::new(),
        }
    }

    /// Whether this record was cloned from another
    #[inline]
    pub fn is_clone(&self) -> bool {
        self.clone_of.is_some()
    }

    /// Look up a field by name, case-insensitively
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }

    /// Raw stored value of a field, or empty when the field is missing
    pub fn raw_value(&self, name: &str) -> &str {
        self.field(name).map(|field| field.value.as_str()).unwrap_or("")
    }

    /// Canonical URI of this record instance
    pub fn uri(&self) -> RecordUri {
        RecordUri::new(self.id, self.language.tag(), self.version)
    }
}
