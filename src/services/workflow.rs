//! Workflow diagram generation.

use std::sync::Arc;

use crate::api::endpoints;
use crate::api::types::{DiagramRequest, WorkflowDiagram};
use crate::api::{ApiClient, ApiResult};

#[derive(Clone)]
pub struct WorkflowService {
    client: Arc<ApiClient>,
}

impl WorkflowService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Ask the backend to synthesize a textual diagram for the workflow.
    pub async fn generate_diagram(&self, request: &DiagramRequest) -> ApiResult<WorkflowDiagram> {
        self.client.post(endpoints::WORKFLOW_DIAGRAM, request).await
    }
}
