//! Workflow types: approval workflows, states, and event history
//!
//! Records can carry a workflow assignment (which workflow they are in and
//! which state they currently occupy). The store keeps an event history per
//! record; histories are stored oldest-first and sorted newest-first for
//! display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One state of a workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowState {
    /// Stable state identifier
    pub id: String,
    /// Human-readable state name
    pub display_name: String,
}

impl WorkflowState {
    /// Create a workflow state
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        WorkflowState {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// An approval workflow and its states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    /// Stable workflow identifier
    pub id: String,
    /// Human-readable workflow name
    pub display_name: String,
    /// States owned by this workflow
    pub states: Vec<WorkflowState>,
}

impl Workflow {
    /// Create a workflow
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        states: Vec<WorkflowState>,
    ) -> Self {
        Workflow {
            id: id.into(),
            display_name: display_name.into(),
            states,
        }
    }

    /// Look up a state by id
    pub fn state(&self, id: &str) -> Option<&WorkflowState> {
        self.states.iter().find(|state| state.id == id)
    }
}

/// A record's position in a workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowAssignment {
    /// Id of the assigned workflow
    pub workflow: String,
    /// Id of the current state, if the record has entered one
    pub state: Option<String>,
}

impl WorkflowAssignment {
    /// Assign a workflow with a current state
    pub fn new(workflow: impl Into<String>, state: impl Into<String>) -> Self {
        WorkflowAssignment {
            workflow: workflow.into(),
            state: Some(state.into()),
        }
    }

    /// Assign a workflow the record has not yet entered
    pub fn without_state(workflow: impl Into<String>) -> Self {
        WorkflowAssignment {
            workflow: workflow.into(),
            state: None,
        }
    }
}

/// One transition in a record's workflow history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowEvent {
    /// When the transition happened
    pub at: DateTime<Utc>,
    /// State id the record left
    pub from_state: String,
    /// State id the record entered
    pub to_state: String,
    /// User who performed the transition
    pub user: String,
}

impl WorkflowEvent {
    /// Create a workflow event
    pub fn new(
        at: DateTime<Utc>,
        from_state: impl Into<String>,
        to_state: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        WorkflowEvent {
            at,
            from_state: from_state.into(),
            to_state: to_state.into(),
            user: user.into(),
        }
    }
}
