//! Home page data: profile and statistics

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use vicoworks_core::{contact_links, ContactLink, HomeProfile, Statistics};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::queries;

/// Home profile response with tag fields already split
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub id: String,
    pub overview: Option<String>,
    pub image_url: Option<String>,
    pub core: Vec<String>,
    pub skills: Vec<String>,
    pub contacts: Vec<ContactLink>,
}

impl From<HomeProfile> for HomeResponse {
    fn from(profile: HomeProfile) -> Self {
        Self {
            core: profile.core_tags(),
            skills: profile.skills(),
            contacts: contact_links(&profile),
            id: profile.id,
            overview: profile.overview,
            image_url: profile.image_url,
        }
    }
}

/// Statistics response; unset counts read as zero
#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub id: String,
    pub visitor_count: i64,
    pub project_count: i64,
}

impl From<Statistics> for StatisticsResponse {
    fn from(stats: Statistics) -> Self {
        Self {
            visitor_count: stats.visitors(),
            project_count: stats.projects(),
            id: stats.id,
        }
    }
}

/// GET /api/home
async fn get_home(State(state): State<Arc<AppState>>) -> Result<Json<HomeResponse>, ApiError> {
    queries::home_profile(state.store.as_ref())
        .await
        .map(|profile| Json(HomeResponse::from(profile)))
        .ok_or(ApiError::Unavailable {
            resource: "home profile",
        })
}

/// GET /api/statistics
async fn get_statistics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatisticsResponse>, ApiError> {
    queries::statistics(state.store.as_ref())
        .await
        .map(|stats| Json(StatisticsResponse::from(stats)))
        .ok_or(ApiError::Unavailable {
            resource: "statistics",
        })
}

/// Home routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/home", get(get_home))
        .route("/api/statistics", get(get_statistics))
}
