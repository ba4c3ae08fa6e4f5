//! Domain services
//!
//! One thin typed facade per feature area. Each method performs exactly one
//! transport call; validation beyond presence checks is left to the calling
//! page.

pub mod code_analysis;
pub mod documentation;
pub mod workflow;

use std::sync::Arc;

use crate::api::ApiClient;

pub use code_analysis::CodeAnalysisService;
pub use documentation::DocumentationService;
pub use workflow::WorkflowService;

/// Bundle of all services sharing one transport client.
#[derive(Clone)]
pub struct Services {
    pub documentation: DocumentationService,
    pub code_analysis: CodeAnalysisService,
    pub workflow: WorkflowService,
}

impl Services {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            documentation: DocumentationService::new(client.clone()),
            code_analysis: CodeAnalysisService::new(client.clone()),
            workflow: WorkflowService::new(client),
        }
    }
}
