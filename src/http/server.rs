//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, basic auth)
//! - Bind server to listener and stop on shutdown

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{AuthConfig, DashboardConfig};
use crate::http::auth::basic_auth_middleware;
use crate::http::handlers::{list_routes, navigate, resolve_route, route_by_name};
use crate::routing::RouteRegistry;
use crate::views::View;

/// Prefix owned by the JSON API. Table paths may not live under it.
pub const API_PREFIX: &str = "/api";

/// Route tables this host cannot serve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("route '{name}' uses path '{path}', which is reserved for the dashboard API")]
    ReservedPath { name: String, path: String },
}

/// Reject entries whose paths the API routes would shadow.
pub fn check_servable(registry: &RouteRegistry<View>) -> Result<(), HostError> {
    let reserved = registry.iter().find(|entry| {
        let path = entry.path();
        path == API_PREFIX
            || path
                .strip_prefix(API_PREFIX)
                .is_some_and(|rest| rest.starts_with('/'))
    });

    match reserved {
        Some(entry) => Err(HostError::ReservedPath {
            name: entry.name().to_string(),
            path: entry.path().to_string(),
        }),
        None => Ok(()),
    }
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RouteRegistry<View>>,
    pub auth: Arc<AuthConfig>,
}

/// HTTP server hosting the dashboard.
pub struct DashboardServer {
    router: Router,
    config: DashboardConfig,
}

impl DashboardServer {
    /// Create a server for `registry`, refusing tables that collide with the API.
    pub fn new(
        config: DashboardConfig,
        registry: Arc<RouteRegistry<View>>,
    ) -> Result<Self, HostError> {
        check_servable(&registry)?;

        let state = AppState {
            registry,
            auth: Arc::new(config.auth.clone()),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &DashboardConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/routes", get(list_routes))
            .route("/api/routes/name/{name}", get(route_by_name))
            .route("/api/routes/resolve", get(resolve_route))
            .route("/", get(navigate))
            .route("/{*path}", get(navigate))
            .layer(middleware::from_fn_with_state(state.clone(), basic_auth_middleware))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// The configured router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            auth = self.config.auth.enabled(),
            "Dashboard server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("Dashboard server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use base64::{engine::general_purpose::STANDARD, Engine};
    use tower::ServiceExt;

    use crate::routing::RouteDef;
    use crate::views::{dashboard_registry, dashboard_routes, DashboardViews};

    fn server(config: DashboardConfig) -> Router {
        DashboardServer::new(config, Arc::new(dashboard_registry().unwrap()))
            .unwrap()
            .router()
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_list_routes() {
        let (status, _, body) = get(server(DashboardConfig::default()), "/api/routes").await;
        assert_eq!(status, StatusCode::OK);

        let routes: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
        assert_eq!(routes.len(), 9);
        assert_eq!(
            routes[0],
            serde_json::json!({ "path": "/", "name": "Overview", "view": "Overview" })
        );
    }

    #[tokio::test]
    async fn test_route_by_name() {
        let (status, _, body) = get(server(DashboardConfig::default()), "/api/routes/name/Search").await;
        assert_eq!(status, StatusCode::OK);
        let route: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(route["path"], "/search");

        let (status, _, body) =
            get(server(DashboardConfig::default()), "/api/routes/name/DoesNotExist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("no route named 'DoesNotExist'"));
    }

    #[tokio::test]
    async fn test_resolve_route() {
        let (status, _, body) = get(
            server(DashboardConfig::default()),
            "/api/routes/resolve?path=/proxies/http",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let route: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(route["name"], "ProxiesHttp");

        let (status, _, _) = get(
            server(DashboardConfig::default()),
            "/api/routes/resolve?path=/does-not-exist",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_navigate_known_location() {
        let (status, _, body) = get(server(DashboardConfig::default()), "/client/online").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("data-view=\"OnlineClient\""));

        let (status, _, body) = get(server(DashboardConfig::default()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("data-view=\"Overview\""));
    }

    #[tokio::test]
    async fn test_navigate_unknown_location_redirects_to_root() {
        let (status, headers, _) = get(server(DashboardConfig::default()), "/does-not-exist").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(headers[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn test_basic_auth() {
        let mut config = DashboardConfig::default();
        config.auth.user = "admin".into();
        config.auth.password = "secret".into();
        let router = server(config);

        let (status, headers, _) = get(router.clone(), "/api/routes").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(headers[header::WWW_AUTHENTICATE], "Basic realm=\"Restricted\"");

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/routes")
                    .header(
                        header::AUTHORIZATION,
                        format!("Basic {}", STANDARD.encode("admin:secret")),
                    )
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    fn registry_with(extra: RouteDef) -> Arc<RouteRegistry<View>> {
        let mut defs = dashboard_routes();
        defs.push(extra);
        Arc::new(RouteRegistry::new(defs, &DashboardViews).unwrap())
    }

    #[test]
    fn test_rejects_paths_under_api() {
        for path in ["/api", "/api/routes", "/api/routes/name/Search"] {
            let registry = registry_with(RouteDef::new(path, "Shadowed", "Search"));
            let err = DashboardServer::new(DashboardConfig::default(), registry).err();
            assert_eq!(
                err,
                Some(HostError::ReservedPath {
                    name: "Shadowed".into(),
                    path: path.into(),
                }),
                "{path}"
            );
        }
    }

    #[test]
    fn test_api_lookalike_paths_are_servable() {
        let registry = registry_with(RouteDef::new("/apis", "Apis", "Search"));
        assert!(check_servable(&registry).is_ok());
    }
}
