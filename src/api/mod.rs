//! HTTP boundary: transport client, endpoint registry, wire types, and the
//! normalized error shape.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
