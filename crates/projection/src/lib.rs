//! Row projection for versioned, localized content records
//!
//! This crate flattens one content record into a display row. Three
//! independent resolution axes interact on the way there:
//!
//! - **language selection** ([`LanguageSelector`]): which language variant
//!   of the record to show,
//! - **version selection** ([`VersionSelector`]): which version of that
//!   variant, driven by a policy token (`first`, `latest`, `previous`,
//!   `next`, or a literal version number),
//! - **per-field rendering** ([`FieldRenderer`]): how each requested column
//!   turns into display text, including the derived workflow summary
//!   ([`WorkflowSummarizer`]).
//!
//! [`RecordProjector`] composes the three: it extracts a record from a
//! polymorphic [`RecordSource`], resolves language then version, and renders
//! the configured columns into an [`OutputRow`].
//!
//! Resolution failures never surface as errors here. This is a display
//! layer: a bad language tag keeps the original record, an unresolved
//! reference falls back to the raw stored value, a missing field renders the
//! [`EMPTY_TEXT`] placeholder. The row is always renderable.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod language;
pub mod options;
pub mod project;
pub mod render;
pub mod row;
pub mod text;
pub mod version;
pub mod workflow;

pub use language::LanguageSelector;
pub use options::{Column, ProjectionOptions, DEFAULT_MAX_LENGTH};
pub use project::{RecordProjector, RecordSource, WorkflowEventRef};
pub use render::{FieldRenderer, SUPPORTED_COLUMNS};
pub use row::{Cell, OutputRow, Rendered, EMPTY_TEXT};
pub use text::{clip, strip_tags, CLIP_MARKER};
pub use version::VersionSelector;
pub use workflow::WorkflowSummarizer;

// Re-export the core model so embedders need a single dependency
pub use tabula_core::{
    ContentRecord, ContentStore, Error, Field, FieldKind, Language, Link, LinkKind, Lock,
    RecordId, RecordStat, RecordUri, Result, VersionNumber, Workflow, WorkflowAssignment,
    WorkflowEvent, WorkflowState,
};
