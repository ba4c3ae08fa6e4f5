//! Endpoint registry
//!
//! Maps logical operations to backend paths. Pure string construction; the
//! route table is an external contract and must be kept in lockstep with the
//! backend.

pub const TEMPLATES: &str = "/api/advanced/templates";
pub const GENERATE_SECTION: &str = "/api/advanced/generate-section";
pub const ANALYZE_CODE: &str = "/api/docs/analyze-code";
pub const WORKFLOW_DIAGRAM: &str = "/api/advanced/workflow-diagram";

/// Section listing for one template.
pub fn template_sections(template_id: &str) -> String {
    format!("{TEMPLATES}/{template_id}/sections")
}
