//! Documentation wizard page
//!
//! A three-step flow: pick a template, fill in content, review with
//! AI-generated text. Steps advance only on explicit next/back, except that
//! selecting a template fetches its section list and auto-advances once the
//! sections arrive.

use std::collections::HashMap;

use crate::api::types::{GeneratedContent, Template};
use crate::api::ApiError;
use crate::ui::{AsyncOp, OpToken, Severity, ToastSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    TemplateSelection,
    ContentEntry,
    AiReview,
}

impl WizardStep {
    pub const TITLES: [&'static str; 3] = ["Select Template", "Enter Content", "AI Review"];

    pub fn index(self) -> usize {
        match self {
            Self::TemplateSelection => 0,
            Self::ContentEntry => 1,
            Self::AiReview => 2,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::TemplateSelection => Self::ContentEntry,
            Self::ContentEntry | Self::AiReview => Self::AiReview,
        }
    }

    pub fn back(self) -> Self {
        match self {
            Self::TemplateSelection | Self::ContentEntry => Self::TemplateSelection,
            Self::AiReview => Self::ContentEntry,
        }
    }
}

/// The document being assembled. Discarded when the wizard is abandoned.
#[derive(Debug, Clone, Default)]
pub struct DocumentDraft {
    pub title: String,
    pub description: String,
    /// Section order; `content` holds the text per section name.
    pub sections: Vec<String>,
    pub content: HashMap<String, String>,
}

impl DocumentDraft {
    /// Replace the section list, initializing every section's content empty.
    /// Title and description survive a template change.
    pub fn reset_sections(&mut self, sections: Vec<String>) {
        self.content = sections
            .iter()
            .map(|s| (s.clone(), String::new()))
            .collect();
        self.sections = sections;
    }
}

#[derive(Debug, Default)]
pub struct DocumentationPage {
    pub step: WizardStep,
    pub selected_template: Option<String>,
    pub draft: DocumentDraft,
    pub templates: AsyncOp<Vec<Template>>,
    pub sections: AsyncOp<Vec<String>>,
    pub generation: AsyncOp<GeneratedContent>,
    /// Highlighted template on the selection step.
    pub template_cursor: usize,
    /// Focused field on the content/review steps: 0 = title,
    /// 1 = description, 2.. = sections in order.
    pub field_cursor: usize,
}

impl DocumentationPage {
    pub fn new() -> Self {
        Self::default()
    }

    // --- template selection -------------------------------------------------

    pub fn begin_templates_fetch(&mut self) -> OpToken {
        self.templates.start()
    }

    pub fn apply_templates(
        &mut self,
        token: OpToken,
        result: Result<Vec<Template>, ApiError>,
        toast: &mut ToastSlot,
    ) {
        match result {
            Ok(templates) => {
                self.templates.resolve(token, templates);
                self.template_cursor = 0;
            }
            Err(err) => {
                if self.templates.reject(token, err.message.clone()) {
                    toast.show(err.message, Severity::Error);
                }
            }
        }
    }

    pub fn template_count(&self) -> usize {
        self.templates.data().map(Vec::len).unwrap_or(0)
    }

    pub fn cursor_template(&self) -> Option<&Template> {
        self.templates.data().and_then(|t| t.get(self.template_cursor))
    }

    pub fn cursor_up(&mut self) {
        self.template_cursor = self.template_cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let count = self.template_count();
        if count > 0 {
            self.template_cursor = (self.template_cursor + 1).min(count - 1);
        }
    }

    /// Choose the highlighted template. Returns the token and template id the
    /// caller must use to fetch the section list.
    pub fn select_template(&mut self) -> Option<(OpToken, String)> {
        let id = self.cursor_template()?.id.clone();
        self.selected_template = Some(id.clone());
        Some((self.sections.start(), id))
    }

    /// Section list arrived. On success the draft gains every section with
    /// empty content and the wizard advances by exactly one step.
    pub fn apply_sections(
        &mut self,
        token: OpToken,
        template_id: String,
        result: Result<Vec<String>, ApiError>,
        toast: &mut ToastSlot,
    ) {
        match result {
            Ok(sections) => {
                if !self.sections.resolve(token, sections.clone()) {
                    return;
                }
                if self.selected_template.as_deref() == Some(template_id.as_str()) {
                    self.draft.reset_sections(sections);
                    self.field_cursor = 0;
                    self.advance();
                }
            }
            Err(err) => {
                if self.sections.reject(token, err.message.clone()) {
                    toast.show(err.message, Severity::Error);
                }
            }
        }
    }

    // --- step navigation ----------------------------------------------------

    pub fn advance(&mut self) {
        self.step = self.step.next();
    }

    pub fn go_back(&mut self) {
        self.step = self.step.back();
    }

    // --- content entry ------------------------------------------------------

    pub fn field_count(&self) -> usize {
        2 + self.draft.sections.len()
    }

    pub fn field_up(&mut self) {
        self.field_cursor = self.field_cursor.saturating_sub(1);
    }

    pub fn field_down(&mut self) {
        self.field_cursor = (self.field_cursor + 1).min(self.field_count().saturating_sub(1));
    }

    /// Name of the section the cursor is on, if it is on a section field.
    pub fn cursor_section(&self) -> Option<&str> {
        self.field_cursor
            .checked_sub(2)
            .and_then(|i| self.draft.sections.get(i))
            .map(String::as_str)
    }

    fn focused_field_mut(&mut self) -> Option<&mut String> {
        match self.field_cursor {
            0 => Some(&mut self.draft.title),
            1 => Some(&mut self.draft.description),
            n => {
                let section = self.draft.sections.get(n - 2)?.clone();
                self.draft.content.get_mut(&section)
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

    pub fn set_content(&mut self, section: &str, value: impl Into<String>) {
        if let Some(slot) = self.draft.content.get_mut(section) {
            *slot = value.into();
        }
    }

    // --- AI review ----------------------------------------------------------

    /// Prepare a generate call for the focused section. Returns the token,
    /// template type, section name and context payload, or None when nothing
    /// is selected.
    pub fn begin_generation(&mut self) -> Option<(OpToken, String, String, serde_json::Value)> {
        let template_type = self.selected_template.clone()?;
        let section = self.cursor_section()?.to_string();
        let context = serde_json::json!({
            "title": self.draft.title,
            "description": self.draft.description,
            "content": self.draft.content,
        });
        Some((self.generation.start(), template_type, section, context))
    }

    pub fn apply_generation(
        &mut self,
        token: OpToken,
        result: Result<GeneratedContent, ApiError>,
        toast: &mut ToastSlot,
    ) {
        match result {
            Ok(generated) => {
                if !self.generation.resolve(token, generated.clone()) {
                    return;
                }
                for (section, text) in generated {
                    self.draft.content.insert(section, text);
                }
                toast.show("Content generated", Severity::Success);
            }
            Err(err) => {
                if self.generation.reject(token, err.message.clone()) {
                    toast.show(err.message, Severity::Error);
                }
            }
        }
    }

}
