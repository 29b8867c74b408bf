//! Liveness plus store reachability
//!
//! The site renders fallbacks when the store is down, so an unreachable
//! store is reported as `degraded` with a 503 rather than hidden.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// `reachable` or `unreachable`
    pub store: &'static str,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let (status, store, code) = match state.store.ping().await {
        Ok(()) => ("ok", "reachable", StatusCode::OK),
        Err(e) => {
            tracing::warn!(error = %e, "health check: store unreachable");
            ("degraded", "unreachable", StatusCode::SERVICE_UNAVAILABLE)
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            store,
        }),
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use crate::http::routes::test_support::{app, send_json};
    use crate::store::MemoryStore;
    use axum::http::StatusCode;
    use std::sync::Arc;

    #[tokio::test]
    async fn reachable_store_is_ok() {
        let (router, _) = app(Arc::new(MemoryStore::new()));
        let (status, body) = send_json(router, "GET", "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["store"], "reachable");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn unreachable_store_is_degraded() {
        let store = Arc::new(MemoryStore::new());
        store.set_fail_reads(true);
        let (router, _) = app(store);

        let (status, body) = send_json(router, "GET", "/health").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["store"], "unreachable");
    }
}
