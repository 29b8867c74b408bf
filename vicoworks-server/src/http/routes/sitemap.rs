//! GET /sitemap.xml

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use chrono::Utc;
use vicoworks_core::sitemap;

use crate::http::server::AppState;
use crate::queries;

async fn sitemap_xml(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    // A failed project fetch still yields the static entries
    let projects = queries::projects(state.store.as_ref()).await;
    let entries = sitemap::entries(&state.base_url, &projects, Utc::now());

    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap::render(&entries),
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/sitemap.xml", get(sitemap_xml))
}

#[cfg(test)]
mod tests {
    use crate::http::routes::test_support::{app, send};
    use crate::store::MemoryStore;
    use axum::http::StatusCode;
    use std::sync::Arc;
    use vicoworks_core::Project;

    #[tokio::test]
    async fn lists_static_and_project_entries() {
        let store = Arc::new(
            MemoryStore::new()
                .with_project(Project {
                    id: "p1".into(),
                    ..Default::default()
                })
                .with_project(Project {
                    id: "p2".into(),
                    ..Default::default()
                }),
        );
        let (router, _) = app(store);

        let (status, body) = send(router, "GET", "/sitemap.xml").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("<url>").count(), 4);
        assert!(body.contains("<loc>https://vicoworks.com</loc>"));
        assert!(body.contains("<loc>https://vicoworks.com/projects</loc>"));
    }

    #[tokio::test]
    async fn failed_fetch_keeps_static_entries() {
        let store = Arc::new(MemoryStore::new());
        store.set_fail_reads(true);
        let (router, _) = app(store);

        let (status, body) = send(router, "GET", "/sitemap.xml").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("<url>").count(), 2);
    }
}
