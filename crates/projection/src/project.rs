//! Projection orchestration
//!
//! [`RecordProjector`] is the single entry point of the crate: it extracts a
//! record from a polymorphic [`RecordSource`], resolves language then
//! version, and renders the configured columns into an [`OutputRow`].
//!
//! A source that yields no record produces no row. That is a legitimate
//! "nothing to display" outcome, not an error.

use std::sync::Arc;

use tracing::debug;

use tabula_core::{ContentRecord, ContentStore, Language, RecordId, RecordUri, WorkflowEvent};

use crate::language::LanguageSelector;
use crate::options::ProjectionOptions;
use crate::render::{FieldRenderer, SUPPORTED_COLUMNS};
use crate::row::{Cell, OutputRow, Rendered};
use crate::version::VersionSelector;

/// A workflow event together with the record it happened to
///
/// Workflow-centric reports hand these to the projector when they want a
/// record row per event.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowEventRef {
    /// The record the event belongs to
    pub record: ContentRecord,
    /// The event itself
    pub event: WorkflowEvent,
}

/// Polymorphic input of a projection call
///
/// Each variant has one resolution rule; the `Token` arm is the explicit
/// no-match case when its text does not parse as a record id.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordSource {
    /// An already-loaded record
    Record(Box<ContentRecord>),
    /// A record id, looked up in the store's default language
    Id(RecordId),
    /// An opaque token that may hold a record id
    Token(String),
    /// A workflow event wrapper carrying its record
    Event(Box<WorkflowEventRef>),
    /// An audit reference addressing one record instance
    Audit(RecordUri),
}

/// Projects one content record into an [`OutputRow`]
///
/// The projector composes the selectors and the renderer over a shared
/// store handle. Language and version override tokens are part of the
/// projector's configuration, alongside the column options.
pub struct RecordProjector<S> {
    store: Arc<S>,
    options: ProjectionOptions,
    language: String,
    version: String,
}

impl<S: ContentStore> RecordProjector<S> {
    /// Create a projector over the given store and options
    pub fn new(store: Arc<S>, options: ProjectionOptions) -> Self {
        RecordProjector {
            store,
            options,
            language: String::new(),
            version: String::new(),
        }
    }

    /// Request a specific language for projected records
    pub fn with_language(mut self, code: impl Into<String>) -> Self {
        self.language = code.into();
        self
    }

    /// Request a specific version policy for projected records
    pub fn with_version(mut self, policy: impl Into<String>) -> Self {
        self.version = policy.into();
        self
    }

    /// The column names with dedicated formatting rules
    pub fn available_columns() -> &'static [&'static str] {
        &SUPPORTED_COLUMNS
    }

    /// Project a source into a row
    ///
    /// Returns None when the source yields no record; the caller skips the
    /// row.
    pub fn project(&self, source: &RecordSource) -> Option<OutputRow> {
        let record = self.extract(source)?;
        let record = LanguageSelector::new(self.store.as_ref()).resolve(record, &self.language);
        let record = VersionSelector::new(self.store.as_ref()).resolve(record, &self.version);

        let mut row = OutputRow::new(
            record.uri().to_string(),
            record.name.clone(),
            record.icon.clone(),
        );

        let renderer = FieldRenderer::new(self.store.as_ref(), self.options.max_length());
        for column in self.options.columns() {
            if row.has_column(&column.header) {
                continue;
            }
            match renderer.render(&column.name, &record) {
                Rendered::Paired { display, raw } => {
                    row.push(Cell::paired(&column.header, display, raw));
                }
                Rendered::Plain(text) => {
                    // an empty rendering falls back to the raw stored value
                    let text = if text.is_empty() {
                        record.raw_value(&column.name).to_string()
                    } else {
                        text
                    };
                    row.push(Cell::plain(&column.header, text));
                }
            }
        }

        Some(row)
    }

    /// One resolution rule per source variant
    fn extract(&self, source: &RecordSource) -> Option<ContentRecord> {
        match source {
            RecordSource::Record(record) => Some((**record).clone()),
            RecordSource::Id(id) => self.store.record_by_id(id),
            RecordSource::Token(token) => match RecordId::from_string(token.trim()) {
                Some(id) => self.store.record_by_id(&id),
                None => {
                    debug!(%token, "source token is not a record id, nothing to display");
                    None
                }
            },
            RecordSource::Event(entry) => Some(entry.record.clone()),
            RecordSource::Audit(uri) => {
                let language = Language::parse(&uri.language).ok()?;
                self.store.record(&uri.id, &language, uri.version)
            }
        }
    }
}
