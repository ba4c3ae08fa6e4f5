//! HTTP transport client
//!
//! Thin wrapper over reqwest that speaks JSON to the documentation backend
//! and normalizes every failure into [`ApiError`]. Paths arrive fully
//! resolved; this layer does no templating, no retries, no caching, and sets
//! no timeout (requests wait as long as the backend takes).

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{ApiError, ApiResult, DEFAULT_ERROR_STATUS};

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a JSON payload.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::from_network)?;
        Self::decode(response).await
    }

    /// GET a JSON payload with query parameters.
    pub async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, ?params, "GET");
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(ApiError::from_network)?;
        Self::decode(response).await
    }

    /// POST a JSON body and decode the JSON reply.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::from_network)?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_error_body(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), message = %err.message, "backend error");
            return Err(err);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::new(format!("Failed to decode response: {e}"), DEFAULT_ERROR_STATUS))
    }
}
