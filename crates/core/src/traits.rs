//! The store abstraction consumed by the projection layer
//!
//! `ContentStore` is the seam between the projection components and wherever
//! records actually live. Methods return `Option` rather than `Result`:
//! every miss has a defined graceful fallback in the display layer, so there
//! is no failure a caller could meaningfully handle.

use crate::field::{Field, Link};
use crate::id::RecordId;
use crate::language::Language;
use crate::record::ContentRecord;
use crate::version::VersionNumber;
use crate::workflow::{Workflow, WorkflowEvent, WorkflowState};

/// Read access to content records, version history, and workflow data
///
/// Implementations must be cheap to query repeatedly: the projection layer
/// issues several lookups per rendered row.
pub trait ContentStore {
    /// Fetch a record instance by id, language, and version
    fn record(
        &self,
        id: &RecordId,
        language: &Language,
        version: VersionNumber,
    ) -> Option<ContentRecord>;

    /// Fetch the latest version of a record in the given language
    fn record_in_language(&self, id: &RecordId, language: &Language) -> Option<ContentRecord>;

    /// Fetch the latest version of a record in the store's default language
    fn record_by_id(&self, id: &RecordId) -> Option<ContentRecord>;

    /// Enumerate the existing version numbers of a record's language variant
    ///
    /// Returns the ordered set, lowest first. Empty if the record is
    /// unknown. The projection layer trusts this list as ground truth.
    fn version_numbers(&self, record: &ContentRecord) -> Vec<VersionNumber>;

    /// The workflow a record is assigned to, if any
    fn workflow(&self, record: &ContentRecord) -> Option<Workflow>;

    /// The workflow state a record currently occupies, if resolvable
    fn workflow_state(&self, record: &ContentRecord) -> Option<WorkflowState>;

    /// The record's workflow event history, oldest first
    fn history(&self, record: &ContentRecord) -> Vec<WorkflowEvent>;

    /// Fetch the highest existing version of a record's language variant
    fn latest_version(&self, record: &ContentRecord) -> Option<ContentRecord> {
        let last = self.version_numbers(record).into_iter().next_back()?;
        self.record(&record.id, &record.language, last)
    }

    /// Whether the record instance is already the highest existing version
    fn is_latest_version(&self, record: &ContentRecord) -> bool {
        self.version_numbers(record)
            .last()
            .is_some_and(|last| *last == record.version)
    }

    /// Resolve a single-reference field to its target record
    fn resolve_target(&self, field: &Field) -> Option<ContentRecord> {
        self.record_by_id(&field.target_id()?)
    }

    /// Resolve a link field to its target record
    fn resolve_link(&self, field: &Field) -> Option<ContentRecord> {
        let link = Link::parse(&field.value).ok()?;
        self.record_by_id(&link.target?)
    }
}
