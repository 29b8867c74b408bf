//! Canonical-host redirect
//!
//! Requests arriving on an alias host (e.g. `www.`) get a 301 to the same
//! path and query on the canonical host. API, health and SEO files are
//! served on any host.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, StatusCode, Uri};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Path prefixes never redirected
const EXEMPT_PREFIXES: &[&str] = &["/api", "/health", "/sitemap.xml", "/robots.txt"];

#[derive(Debug, Clone)]
pub struct CanonicalHost {
    /// Host to redirect to, e.g. `vicoworks.com`
    pub host: String,
    /// Hosts that are redirected
    pub aliases: Vec<String>,
}

impl CanonicalHost {
    pub fn new(host: impl Into<String>, aliases: Vec<String>) -> Self {
        Self {
            host: host.into(),
            aliases,
        }
    }

    /// Redirect location for a request, or `None` to serve it as-is.
    pub fn redirect_target(&self, host: &str, uri: &Uri) -> Option<String> {
        let host = host.split(':').next().unwrap_or(host);
        if !self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(host)) {
            return None;
        }

        let path = uri.path();
        let exempt = EXEMPT_PREFIXES.iter().any(|prefix| {
            path == *prefix || path.starts_with(&format!("{}/", prefix))
        });
        if exempt {
            return None;
        }

        let mut location = format!("https://{}{}", self.host, path);
        if let Some(query) = uri.query() {
            location.push('?');
            location.push_str(query);
        }
        Some(location)
    }
}

/// Axum middleware: answer alias-host requests with a permanent redirect.
pub async fn redirect_to_canonical(
    State(canonical): State<Arc<CanonicalHost>>,
    request: Request,
    next: Next,
) -> Response {
    let target = request
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .and_then(|host| canonical.redirect_target(host, request.uri()));

    match target {
        Some(location) => {
            tracing::debug!(%location, "redirecting to canonical host");
            (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
        }
        None => next.run(request).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical() -> CanonicalHost {
        CanonicalHost::new("vicoworks.com", vec!["www.vicoworks.com".into()])
    }

    #[test]
    fn redirects_alias_with_path_and_query() {
        let uri: Uri = "/projects?category=AI".parse().unwrap();
        assert_eq!(
            canonical().redirect_target("www.vicoworks.com", &uri).as_deref(),
            Some("https://vicoworks.com/projects?category=AI")
        );
    }

    #[test]
    fn ignores_port_and_case() {
        let uri: Uri = "/".parse().unwrap();
        assert_eq!(
            canonical().redirect_target("WWW.vicoworks.com:443", &uri).as_deref(),
            Some("https://vicoworks.com/")
        );
    }

    #[test]
    fn canonical_host_is_served() {
        let uri: Uri = "/projects".parse().unwrap();
        assert!(canonical().redirect_target("vicoworks.com", &uri).is_none());
    }

    #[test]
    fn exempt_paths_are_served() {
        for path in ["/api/projects", "/health", "/sitemap.xml", "/robots.txt"] {
            let uri: Uri = path.parse().unwrap();
            assert!(
                canonical().redirect_target("www.vicoworks.com", &uri).is_none(),
                "{} should not redirect",
                path
            );
        }

        let uri: Uri = "/apiary".parse().unwrap();
        assert!(canonical().redirect_target("www.vicoworks.com", &uri).is_some());
    }
}
