//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default, plus configured origins
//! - Tracing middleware
//! - Optional canonical-host redirect
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Uri};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use vicoworks_core::ServerSettings;

use super::error::ApiError;
use super::middleware::{redirect_to_canonical, CanonicalHost};
use super::routes;
use crate::revalidate::Revalidator;
use crate::store::PortfolioStore;

/// Origins always allowed when CORS is not permissive
const LOCAL_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:3030",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:3030",
];

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3030)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost + allowed_origins)
    ///
    /// WARNING: Setting this to true allows any origin.
    pub cors_permissive: bool,

    /// Origins allowed in addition to localhost
    pub allowed_origins: Vec<String>,

    /// Redirect alias hosts to this host when set
    pub canonical: Option<CanonicalHost>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
            cors_permissive: false,
            allowed_origins: Vec::new(),
            canonical: None,
        }
    }
}

impl From<&ServerSettings> for ServerConfig {
    fn from(settings: &ServerSettings) -> Self {
        Self {
            bind_addr: settings.bind,
            cors_permissive: settings.cors_permissive,
            allowed_origins: settings.allowed_origins.clone(),
            canonical: settings
                .canonical_host
                .as_ref()
                .map(|host| CanonicalHost::new(host.clone(), settings.redirect_hosts.clone())),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PortfolioStore>,
    pub views: Arc<Revalidator>,
    /// Public site URL for sitemap entries
    pub base_url: String,
}

impl AppState {
    pub fn new(store: Arc<dyn PortfolioStore>, base_url: impl Into<String>) -> Self {
        Self {
            store,
            views: Arc::new(Revalidator::new()),
            base_url: base_url.into(),
        }
    }
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = LOCAL_ORIGINS
        .iter()
        .map(|origin| origin.to_string())
        .chain(config.allowed_origins.iter().cloned())
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "CORS: ignoring invalid origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn fallback(uri: Uri) -> ApiError {
    ApiError::NotFound {
        resource: "route",
        id: uri.path().to_string(),
    }
}

/// Build the application router with all routes and middleware.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .merge(routes::health::router())
        .merge(routes::home::router())
        .merge(routes::projects::router())
        .merge(routes::visits::router())
        .merge(routes::sitemap::router())
        .fallback(fallback)
        .with_state(Arc::new(state));

    if let Some(canonical) = &config.canonical {
        tracing::info!(host = %canonical.host, aliases = ?canonical.aliases, "canonical host redirect enabled");
        app = app.layer(axum::middleware::from_fn_with_state(
            Arc::new(canonical.clone()),
            redirect_to_canonical,
        ));
    }

    app.layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// let state = AppState::new(Arc::new(PgStore::new(pool)), "https://vicoworks.com");
/// run_server(state, ServerConfig::default()).await?;
/// ```
pub async fn run_server(state: AppState, config: ServerConfig) -> Result<(), ServerError> {
    let app = build_router(state, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState::new(Arc::new(MemoryStore::new()), "https://vicoworks.com")
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 3030);
        assert!(!config.cors_permissive);
        assert!(config.canonical.is_none());
    }

    #[test]
    fn config_from_settings() {
        let settings = ServerSettings {
            canonical_host: Some("vicoworks.com".into()),
            ..Default::default()
        };
        let config = ServerConfig::from(&settings);
        let canonical = config.canonical.expect("canonical host");
        assert_eq!(canonical.host, "vicoworks.com");
        assert_eq!(canonical.aliases, vec!["www.vicoworks.com"]);
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let app = build_router(state(), &ServerConfig::default());
        let response = app
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn alias_host_is_redirected() {
        let config = ServerConfig {
            canonical: Some(CanonicalHost::new(
                "vicoworks.com",
                vec!["www.vicoworks.com".into()],
            )),
            ..Default::default()
        };
        let app = build_router(state(), &config);

        let response = app
            .oneshot(
                Request::get("/projects?q=ai")
                    .header(header::HOST, "www.vicoworks.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://vicoworks.com/projects?q=ai"
        );
    }

    #[tokio::test]
    async fn alias_host_api_is_served() {
        let config = ServerConfig {
            canonical: Some(CanonicalHost::new(
                "vicoworks.com",
                vec!["www.vicoworks.com".into()],
            )),
            ..Default::default()
        };
        let app = build_router(state(), &config);

        let response = app
            .oneshot(
                Request::get("/health")
                    .header(header::HOST, "www.vicoworks.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
