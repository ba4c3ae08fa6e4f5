//! Workflow records and their store.
//!
//! The workflow list page is entirely client-side: records live in memory
//! and are lost on exit. The store sits behind a trait so a persistence
//! backend can be substituted without touching page logic.

use serde::{Deserialize, Serialize};

use crate::ids::fresh_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    Active,
    Inactive,
}

impl WorkflowStatus {
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

/// A user-defined named process record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: WorkflowStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_run: Option<String>,
}

/// Repository seam for workflow records.
pub trait WorkflowStore: Send {
    fn list(&self) -> Vec<Workflow>;

    fn get(&self, id: &str) -> Option<Workflow>;

    /// Create a workflow. New workflows start inactive with no last run.
    fn add(&mut self, name: String, description: String) -> Workflow;

    /// Update name and description of an existing workflow. Returns false
    /// when the id is unknown.
    fn update(&mut self, id: &str, name: String, description: String) -> bool;

    /// Remove by id. Returns whether a record was removed; absent ids are a
    /// no-op.
    fn remove(&mut self, id: &str) -> bool;

    /// Flip active/inactive. Returns the new status, or None for absent ids.
    fn toggle_status(&mut self, id: &str) -> Option<WorkflowStatus>;
}

#[derive(Debug, Default)]
pub struct InMemoryWorkflowStore {
    items: Vec<Workflow>,
}

impl InMemoryWorkflowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the demo records the list page starts with.
    pub fn with_demo_data() -> Self {
        Self {
            items: vec![
                Workflow {
                    id: fresh_id(),
                    name: "API Documentation".to_string(),
                    description: "Generate documentation for REST API endpoints automatically"
                        .to_string(),
                    status: WorkflowStatus::Active,
                    last_run: Some("2024-01-15".to_string()),
                },
                Workflow {
                    id: fresh_id(),
                    name: "Code Analysis Report".to_string(),
                    description: "Weekly code quality and analysis report".to_string(),
                    status: WorkflowStatus::Active,
                    last_run: Some("2024-01-14".to_string()),
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl WorkflowStore for InMemoryWorkflowStore {
    fn list(&self) -> Vec<Workflow> {
        self.items.clone()
    }

    fn get(&self, id: &str) -> Option<Workflow> {
        self.items.iter().find(|w| w.id == id).cloned()
    }

    fn add(&mut self, name: String, description: String) -> Workflow {
        let workflow = Workflow {
            id: fresh_id(),
            name,
            description,
            status: WorkflowStatus::Inactive,
            last_run: None,
        };
        self.items.push(workflow.clone());
        workflow
    }

    fn update(&mut self, id: &str, name: String, description: String) -> bool {
        match self.items.iter_mut().find(|w| w.id == id) {
            Some(workflow) => {
                workflow.name = name;
                workflow.description = description;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|w| w.id != id);
        self.items.len() != before
    }

    fn toggle_status(&mut self, id: &str) -> Option<WorkflowStatus> {
        self.items.iter_mut().find(|w| w.id == id).map(|w| {
            w.status = w.status.toggled();
            w.status
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_starts_inactive_without_last_run() {
        let mut store = InMemoryWorkflowStore::new();
        let w = store.add("Onboarding".into(), "New hire flow".into());
        assert_eq!(w.status, WorkflowStatus::Inactive);
        assert_eq!(w.last_run, None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn toggle_twice_restores_status() {
        let mut store = InMemoryWorkflowStore::with_demo_data();
        let id = store.list()[0].id.clone();
        let original = store.list()[0].status;

        assert_eq!(store.toggle_status(&id), Some(original.toggled()));
        assert_eq!(store.toggle_status(&id), Some(original));
    }

    #[test]
    fn remove_deletes_exactly_one_and_ignores_absent_ids() {
        let mut store = InMemoryWorkflowStore::with_demo_data();
        let id = store.list()[0].id.clone();

        assert!(store.remove(&id));
        assert_eq!(store.len(), 1);
        assert!(store.get(&id).is_none());

        assert!(!store.remove("not-a-real-id"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_unknown_id_is_rejected() {
        let mut store = InMemoryWorkflowStore::new();
        assert!(!store.update("ghost", "x".into(), "y".into()));
    }
}
