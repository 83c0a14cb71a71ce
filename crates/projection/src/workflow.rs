//! Workflow summary
//!
//! Composes `<workflow> (<state>)` plus the time the record has sat in its
//! current position, derived from the most recent history event. The clock
//! is a parameter of the inner entry point so tests can pin "now".

use chrono::{DateTime, Utc};

use tabula_core::{ContentRecord, ContentStore};

use crate::row::EMPTY_TEXT;

/// Summarizes a record's workflow position and dwell time
pub struct WorkflowSummarizer<'a, S> {
    store: &'a S,
}

impl<'a, S: ContentStore> WorkflowSummarizer<'a, S> {
    /// Create a summarizer over the given store
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Summarize against the current wall clock
    pub fn summarize(&self, record: &ContentRecord) -> String {
        self.summarize_at(record, Utc::now())
    }

    /// Summarize against a pinned clock
    ///
    /// Returns `<workflow display name> (<state display name>) for <d> days
    /// <h> hours <m> minutes`; the parenthetical is omitted when no state
    /// resolves, the dwell suffix when no workflow or no history exists.
    /// An empty composition yields the empty placeholder.
    pub fn summarize_at(&self, record: &ContentRecord, now: DateTime<Utc>) -> String {
        let mut text = String::new();

        let workflow = self.store.workflow(record);
        if let Some(workflow) = &workflow {
            text.push_str(&workflow.display_name);
        }

        if let Some(state) = self.store.workflow_state(record) {
            text.push_str(&format!(" ({})", state.display_name));
        }

        if workflow.is_some() {
            let mut events = self.store.history(record);
            events.sort_by(|a, b| b.at.cmp(&a.at));
            if let Some(latest) = events.first() {
                let span = now.signed_duration_since(latest.at);
                text.push_str(&format!(
                    " for {} days {} hours {} minutes",
                    span.num_days(),
                    span.num_hours() % 24,
                    span.num_minutes() % 60,
                ));
            }
        }

        if text.is_empty() {
            EMPTY_TEXT.to_string()
        } else {
            text
        }
    }
}
