//! Transport client and domain services against an in-process stub backend.
//!
//! The stub mirrors the backend's route table and error conventions so the
//! full request → normalize → decode path is exercised over real HTTP.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use docgen::api::error::DEFAULT_ERROR_MESSAGE;
use docgen::api::types::DiagramRequest;
use docgen::api::ApiClient;
use docgen::services::Services;

async fn templates() -> impl IntoResponse {
    Json(json!([
        {
            "id": "technical",
            "name": "Technical Documentation",
            "description": "Comprehensive template for technical docs",
            "sections": ["Overview", "Installation", "Usage"]
        },
        {
            "id": "user_guide",
            "name": "User Guide",
            "description": "End-user guide template",
            "sections": ["Introduction", "Getting Started"]
        }
    ]))
}

async fn sections(Path(id): Path<String>) -> impl IntoResponse {
    if id == "technical" {
        Json(json!(["Overview", "Usage"])).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": format!("Unknown template: {id}") })),
        )
            .into_response()
    }
}

async fn generate_section(Json(body): Json<Value>) -> impl IntoResponse {
    let section = body["section"].as_str().unwrap_or_default().to_string();
    Json(json!({ section: "Generated text" }))
}

async fn analyze(Json(body): Json<Value>) -> impl IntoResponse {
    if body["language"] == "cobol" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "language not supported" })),
        )
            .into_response();
    }
    Json(json!({
        "analysis": {
            "summary": "One small function",
            "complexity": "low",
            "suggestions": ["Add a docstring"],
            "documentation": "Adds two numbers."
        }
    }))
    .into_response()
}

/// Echoes the received body inside the diagram field so tests can assert on
/// the exact request the client sent.
async fn diagram(Json(body): Json<Value>) -> impl IntoResponse {
    Json(json!({ "diagram": body.to_string() }))
}

async fn echo_params(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    Json(params)
}

async fn broken() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "gateway fell over")
}

async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/api/advanced/templates", get(templates))
        .route("/api/advanced/templates/:id/sections", get(sections))
        .route("/api/advanced/generate-section", post(generate_section))
        .route("/api/docs/analyze-code", post(analyze))
        .route("/api/advanced/workflow-diagram", post(diagram))
        .route("/echo-params", get(echo_params))
        .route("/broken", get(broken));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn services_for(base_url: &str) -> Services {
    Services::new(Arc::new(ApiClient::new(base_url)))
}

#[tokio::test]
async fn templates_decode_into_typed_values() {
    let base = spawn_stub().await;
    let templates = services_for(&base).documentation.get_templates().await.unwrap();

    assert_eq!(templates.len(), 2);
    assert_eq!(templates[0].id, "technical");
    assert_eq!(
        templates[0].sections,
        vec!["Overview", "Installation", "Usage"]
    );
}

#[tokio::test]
async fn template_sections_resolve_the_id_in_the_path() {
    let base = spawn_stub().await;
    let sections = services_for(&base)
        .documentation
        .get_template_sections("technical")
        .await
        .unwrap();
    assert_eq!(sections, vec!["Overview", "Usage"]);
}

#[tokio::test]
async fn unknown_template_maps_detail_field_and_status() {
    let base = spawn_stub().await;
    let err = services_for(&base)
        .documentation
        .get_template_sections("nope")
        .await
        .unwrap_err();
    assert_eq!(err.status, 404);
    assert_eq!(err.message, "Unknown template: nope");
}

#[tokio::test]
async fn generate_section_returns_a_content_mapping() {
    let base = spawn_stub().await;
    let content = services_for(&base)
        .documentation
        .generate_section("technical", "Overview", json!({"title": "My Doc"}))
        .await
        .unwrap();
    assert_eq!(content.get("Overview").map(String::as_str), Some("Generated text"));
}

#[tokio::test]
async fn analyze_unwraps_the_envelope() {
    let base = spawn_stub().await;
    let analysis = services_for(&base)
        .code_analysis
        .analyze_code("def add(a, b): return a + b", "python")
        .await
        .unwrap();
    assert_eq!(analysis.summary, "One small function");
    assert_eq!(analysis.suggestions, vec!["Add a docstring"]);
}

#[tokio::test]
async fn analyze_preserves_the_original_error() {
    let base = spawn_stub().await;
    let err = services_for(&base)
        .code_analysis
        .analyze_code("IDENTIFICATION DIVISION.", "cobol")
        .await
        .unwrap_err();
    assert_eq!(err.status, 400);
    assert_eq!(err.message, "language not supported");
}

#[tokio::test]
async fn diagram_request_body_reaches_the_wire_unchanged() {
    let base = spawn_stub().await;
    let request = DiagramRequest {
        workflow_name: "Onboarding".to_string(),
        description: "New hire onboarding".to_string(),
        steps: vec!["Create account".to_string(), "Verify email".to_string()],
        participants: vec!["Alice (Admin)".to_string()],
    };
    let diagram = services_for(&base)
        .workflow
        .generate_diagram(&request)
        .await
        .unwrap();

    let echoed: Value = serde_json::from_str(&diagram.diagram).unwrap();
    assert_eq!(
        echoed,
        json!({
            "workflow_name": "Onboarding",
            "description": "New hire onboarding",
            "steps": ["Create account", "Verify email"],
            "participants": ["Alice (Admin)"]
        })
    );
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_the_default_message() {
    let base = spawn_stub().await;
    let client = ApiClient::new(base.as_str());
    let err = client.get::<Value>("/broken").await.unwrap_err();
    assert_eq!(err.status, 500);
    assert_eq!(err.message, DEFAULT_ERROR_MESSAGE);
}

#[tokio::test]
async fn query_params_are_forwarded() {
    let base = spawn_stub().await;
    let client = ApiClient::new(base.as_str());
    let echoed: HashMap<String, String> = client
        .get_with_params("/echo-params", &[("page", "2"), ("q", "guide")])
        .await
        .unwrap();
    assert_eq!(echoed.get("page").map(String::as_str), Some("2"));
    assert_eq!(echoed.get("q").map(String::as_str), Some("guide"));
}

#[tokio::test]
async fn unreachable_backend_normalizes_to_a_500() {
    // Nothing listens on this port.
    let client = ApiClient::new("http://127.0.0.1:9");
    let err = client.get::<Value>("/api/advanced/templates").await.unwrap_err();
    assert_eq!(err.status, 500);
}
