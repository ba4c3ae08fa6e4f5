//! Source-code analysis.

use std::sync::Arc;

use crate::api::endpoints;
use crate::api::types::{AnalysisEnvelope, AnalysisResult, AnalyzeCodeRequest};
use crate::api::{ApiClient, ApiResult};

#[derive(Clone)]
pub struct CodeAnalysisService {
    client: Arc<ApiClient>,
}

impl CodeAnalysisService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Submit code for analysis. The backend wraps its result in an
    /// `{"analysis": …}` envelope, which is unwrapped here. Transport errors
    /// propagate with their original message and status intact.
    pub async fn analyze_code(&self, code: &str, language: &str) -> ApiResult<AnalysisResult> {
        let request = AnalyzeCodeRequest {
            code: code.to_string(),
            language: language.to_string(),
        };
        let envelope: AnalysisEnvelope =
            self.client.post(endpoints::ANALYZE_CODE, &request).await?;
        Ok(envelope.analysis)
    }
}
