//! Documentation templates and AI section generation.

use std::sync::Arc;

use crate::api::endpoints;
use crate::api::types::{GenerateSectionRequest, GeneratedContent, Template};
use crate::api::{ApiClient, ApiResult};

#[derive(Clone)]
pub struct DocumentationService {
    client: Arc<ApiClient>,
}

impl DocumentationService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetch the available document templates.
    pub async fn get_templates(&self) -> ApiResult<Vec<Template>> {
        self.client.get(endpoints::TEMPLATES).await
    }

    /// Fetch the ordered section names of one template.
    pub async fn get_template_sections(&self, template_id: &str) -> ApiResult<Vec<String>> {
        self.client
            .get(&endpoints::template_sections(template_id))
            .await
    }

    /// Ask the backend to write content for a template section. Returns a
    /// partial content mapping for the caller to merge into its draft.
    pub async fn generate_section(
        &self,
        template_type: &str,
        section: &str,
        context: serde_json::Value,
    ) -> ApiResult<GeneratedContent> {
        let request = GenerateSectionRequest {
            template_type: template_type.to_string(),
            section: section.to_string(),
            context,
        };
        self.client.post(endpoints::GENERATE_SECTION, &request).await
    }
}
