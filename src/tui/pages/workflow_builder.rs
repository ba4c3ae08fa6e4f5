//! Workflow-diagram builder page
//!
//! Two independent ordered lists (steps, participants) plus a name and
//! description. Generate serializes both lists into one diagram request and
//! shows the textual diagram the backend returns.

use crate::api::types::{DiagramRequest, WorkflowDiagram};
use crate::api::ApiError;
use crate::ids::fresh_id;
use crate::ui::{AsyncOp, OpToken, Severity, ToastSlot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepEntry {
    pub id: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantEntry {
    pub id: String,
    pub name: String,
    pub role: String,
}

/// Which form field has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderField {
    #[default]
    Name,
    Description,
    Step(usize),
    ParticipantName(usize),
    ParticipantRole(usize),
}

#[derive(Debug, Default)]
pub struct WorkflowBuilderPage {
    pub workflow_name: String,
    pub description: String,
    pub steps: Vec<StepEntry>,
    pub participants: Vec<ParticipantEntry>,
    pub diagram: AsyncOp<WorkflowDiagram>,
    pub focus: BuilderField,
}

impl WorkflowBuilderPage {
    pub fn new() -> Self {
        Self::default()
    }

    // --- list editing -------------------------------------------------------

    /// Append an empty step with a fresh unique id and focus it.
    pub fn add_step(&mut self) -> &StepEntry {
        self.steps.push(StepEntry {
            id: fresh_id(),
            description: String::new(),
        });
        self.focus = BuilderField::Step(self.steps.len() - 1);
        &self.steps[self.steps.len() - 1]
    }

    /// Remove a step by id; relative order of the rest is unchanged.
    pub fn remove_step(&mut self, id: &str) -> bool {
        let before = self.steps.len();
        self.steps.retain(|s| s.id != id);
        let removed = self.steps.len() != before;
        if removed {
            self.clamp_focus();
        }
        removed
    }

    pub fn set_step_description(&mut self, id: &str, value: impl Into<String>) {
        if let Some(step) = self.steps.iter_mut().find(|s| s.id == id) {
            step.description = value.into();
        }
    }

    /// Append an empty participant with a fresh unique id and focus it.
    pub fn add_participant(&mut self) -> &ParticipantEntry {
        self.participants.push(ParticipantEntry {
            id: fresh_id(),
            name: String::new(),
            role: String::new(),
        });
        self.focus = BuilderField::ParticipantName(self.participants.len() - 1);
        &self.participants[self.participants.len() - 1]
    }

    pub fn remove_participant(&mut self, id: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p.id != id);
        let removed = self.participants.len() != before;
        if removed {
            self.clamp_focus();
        }
        removed
    }

    pub fn set_participant_name(&mut self, id: &str, value: impl Into<String>) {
        if let Some(p) = self.participants.iter_mut().find(|p| p.id == id) {
            p.name = value.into();
        }
    }

    pub fn set_participant_role(&mut self, id: &str, value: impl Into<String>) {
        if let Some(p) = self.participants.iter_mut().find(|p| p.id == id) {
            p.role = value.into();
        }
    }

    /// Remove whichever list entry currently has focus.
    pub fn remove_focused_entry(&mut self) {
        match self.focus {
            BuilderField::Step(i) => {
                if let Some(id) = self.steps.get(i).map(|s| s.id.clone()) {
                    self.remove_step(&id);
                }
            }
            BuilderField::ParticipantName(i) | BuilderField::ParticipantRole(i) => {
                if let Some(id) = self.participants.get(i).map(|p| p.id.clone()) {
                    self.remove_participant(&id);
                }
            }
            _ => {}
        }
    }

    // --- focus movement -----------------------------------------------------

    /// Linear focus order: name, description, steps, then participants with
    /// a name and a role stop each.
    fn focus_order(&self) -> Vec<BuilderField> {
        let mut order = vec![BuilderField::Name, BuilderField::Description];
        order.extend((0..self.steps.len()).map(BuilderField::Step));
        for i in 0..self.participants.len() {
            order.push(BuilderField::ParticipantName(i));
            order.push(BuilderField::ParticipantRole(i));
        }
        order
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(pos + 1) % order.len()];
    }

    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(pos + order.len() - 1) % order.len()];
    }

    fn clamp_focus(&mut self) {
        let valid = match self.focus {
            BuilderField::Step(i) => i < self.steps.len(),
            BuilderField::ParticipantName(i) | BuilderField::ParticipantRole(i) => {
                i < self.participants.len()
            }
            _ => true,
        };
        if !valid {
            self.focus = BuilderField::Name;
        }
    }

    fn focused_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            BuilderField::Name => Some(&mut self.workflow_name),
            BuilderField::Description => Some(&mut self.description),
            BuilderField::Step(i) => self.steps.get_mut(i).map(|s| &mut s.description),
            BuilderField::ParticipantName(i) => {
                self.participants.get_mut(i).map(|p| &mut p.name)
            }
            BuilderField::ParticipantRole(i) => {
                self.participants.get_mut(i).map(|p| &mut p.role)
            }
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.focused_field_mut() {
            field.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.pop();
        }
    }

    // --- diagram generation -------------------------------------------------

    /// Serialize the form into the diagram request. Steps become their
    /// descriptions; participants become `"Name (Role)"`.
    pub fn diagram_request(&self) -> Result<DiagramRequest, &'static str> {
        if self.workflow_name.is_empty() || self.steps.is_empty() {
            return Err("Add a workflow name and at least one step");
        }
        Ok(DiagramRequest {
            workflow_name: self.workflow_name.clone(),
            description: self.description.clone(),
            steps: self.steps.iter().map(|s| s.description.clone()).collect(),
            participants: self
                .participants
                .iter()
                .map(|p| format!("{} ({})", p.name, p.role))
                .collect(),
        })
    }

    /// Validate and begin a generate call, raising a toast on validation
    /// failure.
    pub fn begin_generate(&mut self, toast: &mut ToastSlot) -> Option<(OpToken, DiagramRequest)> {
        match self.diagram_request() {
            Ok(request) => Some((self.diagram.start(), request)),
            Err(message) => {
                toast.show(message, Severity::Error);
                None
            }
        }
    }

    pub fn apply_diagram(
        &mut self,
        token: OpToken,
        result: Result<WorkflowDiagram, ApiError>,
        toast: &mut ToastSlot,
    ) {
        match result {
            Ok(diagram) => {
                if self.diagram.resolve(token, diagram) {
                    toast.show("Diagram generated", Severity::Success);
                }
            }
            Err(err) => {
                if self.diagram.reject(token, err.message.clone()) {
                    toast.show(err.message, Severity::Error);
                }
            }
        }
    }
}
