//! Project gallery and like endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use vicoworks_core::{category_facets, embed_url, Project, ProjectFilter};

use crate::counters;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::queries;

/// Longest project id accepted in a path
const MAX_PROJECT_ID_LEN: usize = 128;

/// Project card response
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: String,
    pub name: Option<String>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub embed_url: Option<String>,
    pub categories: Vec<String>,
    pub skills: Vec<String>,
    pub like_count: i64,
    pub project_url: Option<String>,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            embed_url: embed_url(p.video_url.as_deref()),
            categories: p.categories(),
            skills: p.skills(),
            like_count: p.likes(),
            started_at: p.started_at.map(|t| t.to_rfc3339()),
            finished_at: p.finished_at.map(|t| t.to_rfc3339()),
            id: p.id,
            name: p.name,
            status: p.status,
            description: p.description,
            video_url: p.video_url,
            project_url: p.project_url,
        }
    }
}

/// Gallery response: filtered items plus facets over the full list
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub items: Vec<ProjectResponse>,
    pub total: usize,
    pub categories: Vec<String>,
}

/// Like response
#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub id: String,
    pub like_count: i64,
}

/// GET /api/projects?q=&category= - full list by likes, filtered after fetch
async fn list_projects(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ProjectFilter>,
) -> Json<ProjectListResponse> {
    let projects = queries::projects(state.store.as_ref()).await;
    let categories = category_facets(&projects);
    let items: Vec<ProjectResponse> = filter
        .apply(projects)
        .into_iter()
        .map(ProjectResponse::from)
        .collect();

    Json(ProjectListResponse {
        total: items.len(),
        items,
        categories,
    })
}

/// POST /api/projects/{id}/like
async fn like_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<LikeResponse>, ApiError> {
    if id.is_empty() || id.len() > MAX_PROJECT_ID_LEN {
        return Err(ApiError::BadRequest {
            message: format!(
                "project id must be 1 to {} characters",
                MAX_PROJECT_ID_LEN
            ),
        });
    }
    // Matched exactly; padding is never stripped
    if id.trim() != id {
        return Err(ApiError::BadRequest {
            message: "project id must not start or end with whitespace".to_string(),
        });
    }

    let like_count =
        counters::increment_project_like(state.store.as_ref(), &state.views, &id).await?;

    Ok(Json(LikeResponse { id, like_count }))
}

/// Project routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/projects", get(list_projects))
        .route("/api/projects/{id}/like", post(like_project))
}
