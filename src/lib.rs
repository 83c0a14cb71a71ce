//! Tabula - tabular projection of versioned, localized content records
//!
//! Tabula flattens one content record into a human-readable row: it resolves
//! the requested language and version, renders each configured column by
//! field type, and summarizes any attached approval workflow.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use tabula::{MemoryStore, ProjectionOptions, RecordProjector, RecordSource};
//!
//! let store = Arc::new(MemoryStore::new());
//! // ... insert records ...
//!
//! let options = ProjectionOptions::parse("columns=name,updated|headers=Name,Updated");
//! let projector = RecordProjector::new(store, options).with_version("latest");
//!
//! if let Some(row) = projector.project(&RecordSource::Id(id)) {
//!     println!("{}: {} cells", row.header, row.cells.len());
//! }
//! ```
//!
//! # Architecture
//!
//! The projection pipeline lives in [`tabula_projection`]; records are read
//! through the `ContentStore` trait, so any backend can stand in for the
//! bundled in-memory store.

// Re-export the public API from tabula-projection
pub use tabula_projection::*;

// The bundled in-memory store
pub use tabula_store::MemoryStore;
