//! Version selection
//!
//! Resolves a record to the version a policy token asks for. The store's
//! enumerated version list is ground truth; unrecognized tokens and
//! out-of-range `previous`/`next` are the identity function.

use tracing::debug;

use tabula_core::{ContentRecord, ContentStore, VersionNumber};

/// Policy token for the first version
pub const FIRST: &str = "first";
/// Policy token for the highest existing version
pub const LATEST: &str = "latest";
/// Policy token for the version before the current one
pub const PREVIOUS: &str = "previous";
/// Policy token for the version after the current one
pub const NEXT: &str = "next";

/// Resolves a record to the version a policy token selects
pub struct VersionSelector<'a, S> {
    store: &'a S,
}

impl<'a, S: ContentStore> VersionSelector<'a, S> {
    /// Create a selector over the given store
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Resolve `record` to the version selected by `policy`
    ///
    /// Recognized tokens: `first`, `latest`, `previous`, `next`, or a
    /// literal version number that exists. Everything else, and fetches
    /// that miss, return the input unchanged.
    pub fn resolve(&self, record: ContentRecord, policy: &str) -> ContentRecord {
        if policy.is_empty() {
            return record;
        }

        match policy {
            FIRST => self.fetch(record, VersionNumber::FIRST),
            LATEST => match self.store.latest_version(&record) {
                Some(latest) => latest,
                None => record,
            },
            PREVIOUS => match record.version.previous() {
                Some(previous) => self.fetch(record, previous),
                None => record,
            },
            NEXT => {
                if self.store.is_latest_version(&record) {
                    record
                } else {
                    let next = record.version.next();
                    self.fetch(record, next)
                }
            }
            token => {
                let existing = self
                    .store
                    .version_numbers(&record)
                    .into_iter()
                    .find(|version| version.to_string() == token);
                match existing {
                    Some(version) => self.fetch(record, version),
                    None => {
                        debug!(policy = token, "version policy miss, keeping record");
                        record
                    }
                }
            }
        }
    }

    /// Fetch the given version of the record, keeping the input on a miss
    fn fetch(&self, record: ContentRecord, version: VersionNumber) -> ContentRecord {
        match self.store.record(&record.id, &record.language, version) {
            Some(resolved) => resolved,
            None => record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::{Language, RecordId};
    use tabula_store::MemoryStore;

    /// Store with versions 1..=3 of one English record
    fn store() -> (MemoryStore, RecordId) {
        let store = MemoryStore::new();
        let id = RecordId::new();
        for number in [1u32, 2, 3] {
            store.insert(ContentRecord::new(
                id,
                format!("page-v{number}"),
                Language::english(),
                VersionNumber::new(number).unwrap(),
            ));
        }
        (store, id)
    }

    fn at(store: &MemoryStore, id: &RecordId, number: u32) -> ContentRecord {
        store
            .record(
                id,
                &Language::english(),
                VersionNumber::new(number).unwrap(),
            )
            .unwrap()
    }

    #[test]
    fn test_policy_first() {
        let (store, id) = store();
        let resolved = VersionSelector::new(&store).resolve(at(&store, &id, 3), "first");
        assert_eq!(resolved.version.number(), 1);
    }

    #[test]
    fn test_policy_latest() {
        let (store, id) = store();
        let resolved = VersionSelector::new(&store).resolve(at(&store, &id, 1), "latest");
        assert_eq!(resolved.version.number(), 3);
    }

    #[test]
    fn test_policy_previous() {
        let (store, id) = store();
        let resolved = VersionSelector::new(&store).resolve(at(&store, &id, 3), "previous");
        assert_eq!(resolved.version.number(), 2);
    }

    #[test]
    fn test_policy_previous_at_first_is_identity() {
        let (store, id) = store();
        let resolved = VersionSelector::new(&store).resolve(at(&store, &id, 1), "previous");
        assert_eq!(resolved.version.number(), 1);
    }

    #[test]
    fn test_policy_next() {
        let (store, id) = store();
        let resolved = VersionSelector::new(&store).resolve(at(&store, &id, 1), "next");
        assert_eq!(resolved.version.number(), 2);
    }

    #[test]
    fn test_policy_next_at_latest_is_identity() {
        let (store, id) = store();
        let resolved = VersionSelector::new(&store).resolve(at(&store, &id, 3), "next");
        assert_eq!(resolved.version.number(), 3);
    }

    #[test]
    fn test_policy_literal_number() {
        let (store, id) = store();
        let resolved = VersionSelector::new(&store).resolve(at(&store, &id, 3), "2");
        assert_eq!(resolved.version.number(), 2);
        assert_eq!(resolved.name, "page-v2");
    }

    #[test]
    fn test_policy_literal_number_missing_is_identity() {
        let (store, id) = store();
        let resolved = VersionSelector::new(&store).resolve(at(&store, &id, 3), "9");
        assert_eq!(resolved.version.number(), 3);
    }

    #[test]
    fn test_policy_unrecognized_token_is_identity() {
        let (store, id) = store();
        let record = at(&store, &id, 2);
        let resolved = VersionSelector::new(&store).resolve(record.clone(), "newest");
        assert_eq!(resolved, record);
    }

    #[test]
    fn test_policy_empty_is_identity() {
        let (store, id) = store();
        let record = at(&store, &id, 2);
        let resolved = VersionSelector::new(&store).resolve(record.clone(), "");
        assert_eq!(resolved, record);
    }

    #[test]
    fn test_resolution_does_not_fabricate_versions() {
        // gap in history: versions 1 and 3 only
        let store = MemoryStore::new();
        let id = RecordId::new();
        for number in [1u32, 3] {
            store.insert(ContentRecord::new(
                id,
                format!("page-v{number}"),
                Language::english(),
                VersionNumber::new(number).unwrap(),
            ));
        }
        let v3 = store
            .record(&id, &Language::english(), VersionNumber::new(3).unwrap())
            .unwrap();

        // previous of 3 is 2, which does not exist: the fetch misses and
        // the input comes back unchanged
        let resolved = VersionSelector::new(&store).resolve(v3.clone(), "previous");
        assert_eq!(resolved, v3);
    }
}
