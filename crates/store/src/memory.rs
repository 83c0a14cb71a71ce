//! MemoryStore: BTreeMap-backed content store
//!
//! ## Design
//!
//! - `BTreeMap<(RecordId, language tag, version), ContentRecord>` for the
//!   record table; the ordered composite key makes "all versions of one
//!   language variant" a contiguous range scan.
//! - `parking_lot::RwLock` around each table so a shared `Arc<MemoryStore>`
//!   is safe across threads; reads clone out of the lock.
//! - Workflow and history tables are keyed independently of language, so a
//!   record's workflow history is shared across its language variants.

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;

use tabula_core::{
    ContentRecord, ContentStore, Language, RecordId, VersionNumber, Workflow, WorkflowEvent,
    WorkflowState,
};

/// Composite record key: (id, normalized language tag, version number)
type RecordKey = (RecordId, String, u32);

/// In-memory content store
///
/// Records are keyed by id, language, and version. Lookups that omit the
/// version resolve to the highest stored version of the language variant.
#[derive(Debug)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<RecordKey, ContentRecord>>,
    workflows: RwLock<HashMap<String, Workflow>>,
    histories: RwLock<HashMap<RecordId, Vec<WorkflowEvent>>>,
    default_language: Language,
}

impl MemoryStore {
    /// Create an empty store defaulting to English
    pub fn new() -> Self {
        Self::with_default_language(Language::english())
    }

    /// Create an empty store with an explicit default language
    pub fn with_default_language(default_language: Language) -> Self {
        MemoryStore {
            records: RwLock::new(BTreeMap::new()),
            workflows: RwLock::new(HashMap::new()),
            histories: RwLock::new(HashMap::new()),
            default_language,
        }
    }

    /// The language id-only lookups resolve against
    pub fn default_language(&self) -> &Language {
        &self.default_language
    }

    /// Insert a record instance, replacing any existing instance at the
    /// same (id, language, version) coordinate
    pub fn insert(&self, record: ContentRecord) {
        let key = (
            record.id,
            record.language.tag().to_string(),
            record.version.number(),
        );
        self.records.write().insert(key, record);
    }

    /// Register a workflow so assignments on records can resolve
    pub fn insert_workflow(&self, workflow: Workflow) {
        self.workflows.write().insert(workflow.id.clone(), workflow);
    }

    /// Replace a record's workflow history (oldest first)
    pub fn set_history(&self, id: RecordId, events: Vec<WorkflowEvent>) {
        self.histories.write().insert(id, events);
    }

    /// Append one event to a record's workflow history
    pub fn push_event(&self, id: RecordId, event: WorkflowEvent) {
        self.histories.write().entry(id).or_default().push(event);
    }

    /// Number of stored record instances
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store holds no record instances
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Highest stored version of a language variant
    fn latest_in(&self, id: &RecordId, tag: &str) -> Option<ContentRecord> {
        let records = self.records.read();
        records
            .range((*id, tag.to_string(), 1)..=(*id, tag.to_string(), u32::MAX))
            .next_back()
            .map(|(_, record)| record.clone())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore for MemoryStore {
    fn record(
        &self,
        id: &RecordId,
        language: &Language,
        version: VersionNumber,
    ) -> Option<ContentRecord> {
        let key = (*id, language.tag().to_string(), version.number());
        self.records.read().get(&key).cloned()
    }

    fn record_in_language(&self, id: &RecordId, language: &Language) -> Option<ContentRecord> {
        self.latest_in(id, language.tag())
    }

    fn record_by_id(&self, id: &RecordId) -> Option<ContentRecord> {
        self.latest_in(id, self.default_language.tag())
    }

    fn version_numbers(&self, record: &ContentRecord) -> Vec<VersionNumber> {
        let tag = record.language.tag().to_string();
        let records = self.records.read();
        records
            .range((record.id, tag.clone(), 1)..=(record.id, tag, u32::MAX))
            .filter_map(|((_, _, number), _)| VersionNumber::new(*number))
            .collect()
    }

    fn workflow(&self, record: &ContentRecord) -> Option<Workflow> {
        let assignment = record.workflow.as_ref()?;
        self.workflows.read().get(&assignment.workflow).cloned()
    }

    fn workflow_state(&self, record: &ContentRecord) -> Option<WorkflowState> {
        let assignment = record.workflow.as_ref()?;
        let state_id = assignment.state.as_ref()?;
        let workflows = self.workflows.read();
        workflows.get(&assignment.workflow)?.state(state_id).cloned()
    }

    fn history(&self, record: &ContentRecord) -> Vec<WorkflowEvent> {
        self.histories
            .read()
            .get(&record.id)
            .cloned()
            .unwrap_or_default()
    }
}
