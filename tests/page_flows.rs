//! Page-level flows exercised against real page state, no mocks.

use serde_json::json;

use docgen::api::types::Template;
use docgen::api::ApiError;
use docgen::tui::pages::documentation::{DocumentationPage, WizardStep};
use docgen::tui::pages::workflow_builder::WorkflowBuilderPage;
use docgen::tui::pages::workflows::WorkflowsPage;
use docgen::ui::{Severity, ToastSlot};
use docgen::workflows::{InMemoryWorkflowStore, WorkflowStatus};

fn technical_template() -> Template {
    Template {
        id: "technical".to_string(),
        name: "Technical Documentation".to_string(),
        description: "Comprehensive template".to_string(),
        sections: vec!["Overview".to_string(), "Usage".to_string()],
    }
}

mod wizard {
    use super::*;

    #[test]
    fn selecting_a_template_populates_content_and_advances_one_step() {
        let mut page = DocumentationPage::new();
        let mut toast = ToastSlot::new();

        let token = page.begin_templates_fetch();
        page.apply_templates(token, Ok(vec![technical_template()]), &mut toast);

        let step_before = page.step.index();
        let (token, template_id) = page.select_template().unwrap();
        assert_eq!(template_id, "technical");

        page.apply_sections(
            token,
            template_id,
            Ok(vec!["Overview".to_string(), "Usage".to_string()]),
            &mut toast,
        );

        assert_eq!(page.step.index(), step_before + 1);
        assert_eq!(page.step, WizardStep::ContentEntry);
        assert_eq!(page.draft.sections, vec!["Overview", "Usage"]);
        assert_eq!(page.draft.content.get("Overview").map(String::as_str), Some(""));
        assert_eq!(page.draft.content.get("Usage").map(String::as_str), Some(""));
    }

    #[test]
    fn stale_section_response_does_not_advance_the_wizard() {
        let mut page = DocumentationPage::new();
        let mut toast = ToastSlot::new();

        let token = page.begin_templates_fetch();
        page.apply_templates(token, Ok(vec![technical_template()]), &mut toast);

        let (stale, _) = page.select_template().unwrap();
        let (current, id) = page.select_template().unwrap();

        page.apply_sections(
            stale,
            "technical".to_string(),
            Ok(vec!["Old".to_string()]),
            &mut toast,
        );
        assert_eq!(page.step, WizardStep::TemplateSelection);
        assert!(page.draft.sections.is_empty());

        page.apply_sections(current, id, Ok(vec!["Overview".to_string()]), &mut toast);
        assert_eq!(page.step, WizardStep::ContentEntry);
        assert_eq!(page.draft.sections, vec!["Overview"]);
    }

    #[test]
    fn failed_template_fetch_raises_an_error_toast() {
        let mut page = DocumentationPage::new();
        let mut toast = ToastSlot::new();

        let token = page.begin_templates_fetch();
        page.apply_templates(token, Err(ApiError::new("backend unreachable", 500)), &mut toast);

        assert!(!page.templates.is_loading());
        assert_eq!(page.templates.error(), Some("backend unreachable"));
        let visible = toast.current().unwrap();
        assert_eq!(visible.message, "backend unreachable");
        assert_eq!(visible.severity, Severity::Error);
    }

    #[test]
    fn generated_content_merges_into_the_draft() {
        let mut page = DocumentationPage::new();
        let mut toast = ToastSlot::new();

        let token = page.begin_templates_fetch();
        page.apply_templates(token, Ok(vec![technical_template()]), &mut toast);
        let (token, id) = page.select_template().unwrap();
        page.apply_sections(
            token,
            id,
            Ok(vec!["Overview".to_string(), "Usage".to_string()]),
            &mut toast,
        );
        page.set_content("Usage", "hand-written");
        page.advance();

        // Focus the Overview section (fields: title, description, sections…).
        page.field_cursor = 2;
        let (token, template_type, section, context) = page.begin_generation().unwrap();
        assert_eq!(template_type, "technical");
        assert_eq!(section, "Overview");
        assert_eq!(context["title"], json!(""));

        let generated = std::collections::HashMap::from([(
            "Overview".to_string(),
            "Generated overview".to_string(),
        )]);
        page.apply_generation(token, Ok(generated), &mut toast);

        assert_eq!(
            page.draft.content.get("Overview").map(String::as_str),
            Some("Generated overview")
        );
        // Untouched sections keep their text.
        assert_eq!(
            page.draft.content.get("Usage").map(String::as_str),
            Some("hand-written")
        );
        assert_eq!(toast.current().unwrap().severity, Severity::Success);
    }
}

mod builder {
    use super::*;

    #[test]
    fn step_ids_are_unique_and_removal_preserves_order() {
        let mut page = WorkflowBuilderPage::new();
        let a = page.add_step().id.clone();
        let b = page.add_step().id.clone();
        let c = page.add_step().id.clone();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);

        page.set_step_description(&a, "first");
        page.set_step_description(&b, "second");
        page.set_step_description(&c, "third");

        assert!(page.remove_step(&b));
        let remaining: Vec<&str> = page.steps.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(remaining, vec!["first", "third"]);

        assert!(!page.remove_step(&b), "removing twice is a no-op");
        assert_eq!(page.steps.len(), 2);
    }

    #[test]
    fn diagram_request_serializes_exactly() {
        let mut page = WorkflowBuilderPage::new();
        page.workflow_name = "Onboarding".to_string();
        page.description = "New hire onboarding".to_string();

        let s1 = page.add_step().id.clone();
        page.set_step_description(&s1, "Create account");
        let s2 = page.add_step().id.clone();
        page.set_step_description(&s2, "Verify email");

        let p = page.add_participant().id.clone();
        page.set_participant_name(&p, "Alice");
        page.set_participant_role(&p, "Admin");

        let request = page.diagram_request().unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "workflow_name": "Onboarding",
                "description": "New hire onboarding",
                "steps": ["Create account", "Verify email"],
                "participants": ["Alice (Admin)"]
            })
        );
    }

    #[test]
    fn generate_requires_a_name_and_one_step() {
        let mut page = WorkflowBuilderPage::new();
        let mut toast = ToastSlot::new();

        assert!(page.begin_generate(&mut toast).is_none());
        assert_eq!(toast.current().unwrap().severity, Severity::Error);

        page.workflow_name = "Onboarding".to_string();
        assert!(page.begin_generate(&mut toast).is_none());

        page.add_step();
        assert!(page.begin_generate(&mut toast).is_some());
    }
}

mod workflow_list {
    use super::*;

    #[test]
    fn toggling_twice_restores_the_original_status() {
        let mut page = WorkflowsPage::default();
        let original = page.workflows()[0].status;

        page.toggle_selected();
        assert_eq!(page.workflows()[0].status, original.toggled());
        page.toggle_selected();
        assert_eq!(page.workflows()[0].status, original);
    }

    #[test]
    fn deleting_removes_exactly_one_entry() {
        let mut page = WorkflowsPage::default();
        let before = page.workflows();
        assert_eq!(before.len(), 2);

        page.delete_selected();
        let after = page.workflows();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].id, before[1].id);
    }

    #[test]
    fn dialog_creates_an_inactive_workflow() {
        let mut page = WorkflowsPage::new(Box::new(InMemoryWorkflowStore::new()));
        let mut toast = ToastSlot::new();

        page.open_create_dialog();
        for c in "Release Notes".chars() {
            page.dialog_input(c);
        }
        page.dialog_toggle_field();
        for c in "Summarize merged changes".chars() {
            page.dialog_input(c);
        }
        page.save_dialog(&mut toast);

        assert!(page.dialog.is_none());
        let workflows = page.workflows();
        assert_eq!(workflows.len(), 1);
        assert_eq!(workflows[0].name, "Release Notes");
        assert_eq!(workflows[0].status, WorkflowStatus::Inactive);
        assert_eq!(workflows[0].last_run, None);
    }

    #[test]
    fn empty_name_keeps_the_dialog_open() {
        let mut page = WorkflowsPage::new(Box::new(InMemoryWorkflowStore::new()));
        let mut toast = ToastSlot::new();

        page.open_create_dialog();
        page.save_dialog(&mut toast);

        assert!(page.dialog.is_some());
        assert_eq!(toast.current().unwrap().severity, Severity::Error);
        assert!(page.workflows().is_empty());
    }

    #[test]
    fn editing_updates_name_and_description_in_place() {
        let mut page = WorkflowsPage::default();
        let id = page.workflows()[0].id.clone();
        let mut toast = ToastSlot::new();

        page.open_edit_dialog();
        // Append to the existing name.
        for c in " v2".chars() {
            page.dialog_input(c);
        }
        page.save_dialog(&mut toast);

        let workflows = page.workflows();
        assert_eq!(workflows[0].id, id);
        assert!(workflows[0].name.ends_with(" v2"));
        assert_eq!(workflows.len(), 2);
    }
}
