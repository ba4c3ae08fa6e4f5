//! Wire types shared with the documentation backend
//!
//! Shapes mirror the backend's JSON contract exactly; field names are the
//! wire names.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named document skeleton with an ordered list of section titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub sections: Vec<String>,
}

/// Result of one code-analysis request. Immutable until the next request
/// replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub complexity: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    pub documentation: String,
}

/// Envelope the analyze endpoint wraps its result in.
#[derive(Debug, Deserialize)]
pub struct AnalysisEnvelope {
    pub analysis: AnalysisResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeCodeRequest {
    pub code: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateSectionRequest {
    pub template_type: String,
    pub section: String,
    pub context: serde_json::Value,
}

/// Partial content mapping returned by the generate-section endpoint,
/// merged into the draft's content.
pub type GeneratedContent = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramRequest {
    pub workflow_name: String,
    pub description: String,
    pub steps: Vec<String>,
    pub participants: Vec<String>,
}

/// Textual graph description; rendering is delegated to an external viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowDiagram {
    pub diagram: String,
}
