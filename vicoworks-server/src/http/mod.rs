//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost plus configured origins by default)
//! - Request tracing
//! - Canonical-host redirect
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use middleware::CanonicalHost;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
