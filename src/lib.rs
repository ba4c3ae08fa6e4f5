//! docgen: terminal front-end for a documentation-generation service
//!
//! This library provides:
//! - HTTP transport client and typed domain services for the backend
//! - Loading/error/data and notification state containers
//! - A client-side workflow store
//! - Terminal UI (TUI) pages: documentation wizard, code analysis,
//!   workflow-diagram builder, and a workflow list

pub mod api;
pub mod config;
pub mod ids;
pub mod services;
pub mod tui;
pub mod ui;
pub mod workflows;

pub use api::{ApiClient, ApiError};
pub use config::Config;
pub use services::Services;
