//! Workflow list page
//!
//! Self-contained CRUD over workflow records: toggle status, delete, and a
//! modal create/edit form. Everything stays in the store; no backend calls
//! are made from this page.

use crate::ui::{Severity, ToastSlot};
use crate::workflows::{InMemoryWorkflowStore, Workflow, WorkflowStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Description,
}

/// Modal create/edit form. `editing` holds the id of the workflow being
/// edited, or None when creating.
#[derive(Debug, Default)]
pub struct WorkflowDialog {
    pub editing: Option<String>,
    pub name: String,
    pub description: String,
    pub field: FormField,
}

pub struct WorkflowsPage {
    store: Box<dyn WorkflowStore>,
    pub selected: usize,
    pub dialog: Option<WorkflowDialog>,
}

impl Default for WorkflowsPage {
    fn default() -> Self {
        Self::new(Box::new(InMemoryWorkflowStore::with_demo_data()))
    }
}

impl WorkflowsPage {
    pub fn new(store: Box<dyn WorkflowStore>) -> Self {
        Self {
            store,
            selected: 0,
            dialog: None,
        }
    }

    pub fn workflows(&self) -> Vec<Workflow> {
        self.store.list()
    }

    pub fn selected_workflow(&self) -> Option<Workflow> {
        self.store.list().into_iter().nth(self.selected)
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let count = self.store.list().len();
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.store.list().len();
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    // --- dialog -------------------------------------------------------------

    pub fn open_create_dialog(&mut self) {
        self.dialog = Some(WorkflowDialog::default());
    }

    pub fn open_edit_dialog(&mut self) {
        if let Some(workflow) = self.selected_workflow() {
            self.dialog = Some(WorkflowDialog {
                editing: Some(workflow.id),
                name: workflow.name,
                description: workflow.description,
                field: FormField::Name,
            });
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn dialog_toggle_field(&mut self) {
        if let Some(dialog) = &mut self.dialog {
            dialog.field = match dialog.field {
                FormField::Name => FormField::Description,
                FormField::Description => FormField::Name,
            };
        }
    }

    pub fn dialog_input(&mut self, c: char) {
        if let Some(dialog) = &mut self.dialog {
            match dialog.field {
                FormField::Name => dialog.name.push(c),
                FormField::Description => dialog.description.push(c),
            }
        }
    }

    pub fn dialog_backspace(&mut self) {
        if let Some(dialog) = &mut self.dialog {
            match dialog.field {
                FormField::Name => dialog.name.pop(),
                FormField::Description => dialog.description.pop(),
            };
        }
    }

    /// Commit the dialog: update when editing, otherwise create. An empty
    /// name is a validation failure and keeps the dialog open.
    pub fn save_dialog(&mut self, toast: &mut ToastSlot) {
        let Some(dialog) = &self.dialog else {
            return;
        };
        if dialog.name.trim().is_empty() {
            toast.show("Workflow name is required", Severity::Error);
            return;
        }
        let name = dialog.name.clone();
        let description = dialog.description.clone();
        match dialog.editing.clone() {
            Some(id) => {
                self.store.update(&id, name, description);
            }
            None => {
                self.store.add(name, description);
            }
        }
        self.dialog = None;
        self.clamp_selection();
    }

    // --- list actions -------------------------------------------------------

    pub fn toggle_selected(&mut self) {
        if let Some(workflow) = self.selected_workflow() {
            self.store.toggle_status(&workflow.id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(workflow) = self.selected_workflow() {
            self.store.remove(&workflow.id);
            self.clamp_selection();
        }
    }
}
