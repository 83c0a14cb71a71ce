//! Language selection
//!
//! Resolves a record to its variant in a requested language. Every miss is
//! the identity function: an empty request, an unknown tag, or a store miss
//! all hand the input record back unchanged.

use tracing::debug;

use tabula_core::{ContentRecord, ContentStore, Language};

/// Resolves a record to the requested language variant
pub struct LanguageSelector<'a, S> {
    store: &'a S,
}

impl<'a, S: ContentStore> LanguageSelector<'a, S> {
    /// Create a selector over the given store
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Resolve `record` to its variant in `code`'s language
    ///
    /// Returns the input unchanged when `code` is empty, fails to parse, or
    /// the store has no variant in that language.
    pub fn resolve(&self, record: ContentRecord, code: &str) -> ContentRecord {
        if code.is_empty() {
            return record;
        }

        let language = match Language::parse(code) {
            Ok(language) => language,
            Err(err) => {
                debug!(code, %err, "language resolution miss, keeping record");
                return record;
            }
        };

        match self.store.record_in_language(&record.id, &language) {
            Some(resolved) => resolved,
            None => record,
        }
    }
}
