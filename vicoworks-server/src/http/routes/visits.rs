//! Visitor counter and view refresh endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::counters;
use crate::http::server::AppState;
use crate::revalidate::ViewRefreshed;

/// POST /api/visits - count a page visit
///
/// Always 204: the visitor never sees a counter failure. The failure is
/// logged inside the counter operation.
async fn record_visit(State(state): State<Arc<AppState>>) -> StatusCode {
    let _ = counters::increment_visitor_count(state.store.as_ref(), &state.views).await;
    StatusCode::NO_CONTENT
}

#[derive(Debug, Serialize)]
pub struct RevalidationsResponse {
    pub views: Vec<ViewEntry>,
}

#[derive(Debug, Serialize)]
pub struct ViewEntry {
    pub path: &'static str,
    #[serde(flatten)]
    pub refreshed: ViewRefreshed,
}

/// GET /api/revalidations - current refresh generation of each view
async fn revalidations(State(state): State<Arc<AppState>>) -> Json<RevalidationsResponse> {
    let views = state
        .views
        .snapshot()
        .into_iter()
        .map(|refreshed| ViewEntry {
            path: refreshed.view.path(),
            refreshed,
        })
        .collect();
    Json(RevalidationsResponse { views })
}

/// Visit routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/visits", post(record_visit))
        .route("/api/revalidations", get(revalidations))
}
