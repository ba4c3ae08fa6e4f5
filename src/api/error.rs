//! Normalized transport errors
//!
//! Every failure at the HTTP boundary (connection refused, non-2xx status,
//! undecodable body) is mapped into a single [`ApiError`] shape so pages and
//! services never have to inspect raw reqwest errors.

use thiserror::Error;

/// Fallback message when the backend supplies no usable error detail.
pub const DEFAULT_ERROR_MESSAGE: &str = "API request failed";

/// Status recorded when no HTTP status exists (network failure, bad body).
pub const DEFAULT_ERROR_STATUS: u16 = 500;

/// The single failure shape all transport errors normalize into.
///
/// `message` prefers a backend-supplied message and falls back to
/// [`DEFAULT_ERROR_MESSAGE`]; `status` defaults to
/// [`DEFAULT_ERROR_STATUS`] when the failure carried no HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: u16,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Map a non-success HTTP response body into an `ApiError`.
    ///
    /// The backend reports errors as a JSON object carrying a `message`
    /// field (or `detail`, the framework's spelling for route-level errors).
    /// Anything else falls back to the fixed default message.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .or_else(|| value.get("detail"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
        Self { message, status }
    }

    /// Map a reqwest-level failure (connect, timeout, decode) into an `ApiError`.
    pub fn from_network(err: reqwest::Error) -> Self {
        let status = err
            .status()
            .map(|s| s.as_u16())
            .unwrap_or(DEFAULT_ERROR_STATUS);
        let message = if err.is_connect() {
            format!("Connection failed: {err}")
        } else if err.is_timeout() {
            format!("Request timeout: {err}")
        } else {
            err.to_string()
        };
        Self { message, status }
    }

    /// Whether the error came from the server side (5xx or no status at all).
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_is_preferred() {
        let err = ApiError::from_error_body(400, r#"{"message":"template unknown"}"#);
        assert_eq!(err.message, "template unknown");
        assert_eq!(err.status, 400);
    }

    #[test]
    fn detail_field_is_accepted() {
        let err = ApiError::from_error_body(404, r#"{"detail":"no such template"}"#);
        assert_eq!(err.message, "no such template");
        assert_eq!(err.status, 404);
    }

    #[test]
    fn missing_message_falls_back_to_default() {
        let err = ApiError::from_error_body(502, r#"{"oops":true}"#);
        assert_eq!(err.message, DEFAULT_ERROR_MESSAGE);
        assert_eq!(err.status, 502);

        let err = ApiError::from_error_body(500, "<html>gateway</html>");
        assert_eq!(err.message, DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn display_shows_the_message() {
        let err = ApiError::new("backend unreachable", 500);
        assert_eq!(err.to_string(), "backend unreachable");
    }

    #[test]
    fn server_error_classification() {
        assert!(ApiError::new("boom", 500).is_server_error());
        assert!(!ApiError::new("bad input", 400).is_server_error());
    }
}
