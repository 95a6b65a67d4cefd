//! Request handlers for the dashboard host.

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;

use crate::http::response::{render_shell, ApiError};
use crate::http::server::AppState;
use crate::routing::{RouteEntry, ROOT_PATH};
use crate::views::View;

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub path: String,
}

/// The full table in definition order.
pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteEntry<View>>> {
    Json(state.registry.list().to_vec())
}

pub async fn route_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RouteEntry<View>>, ApiError> {
    state
        .registry
        .resolve_by_name(&name)
        .cloned()
        .map(Json)
        .ok_or(ApiError::UnknownName(name))
}

pub async fn resolve_route(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<RouteEntry<View>>, ApiError> {
    state
        .registry
        .resolve_by_path(&query.path)
        .cloned()
        .map(Json)
        .ok_or(ApiError::UnknownPath(query.path))
}

/// Mount the view for the requested location, or send the browser to the root.
pub async fn navigate(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();
    match state.registry.resolve_by_path(path) {
        Some(entry) => match render_shell(&state.registry, entry) {
            Ok(page) => Html(page).into_response(),
            Err(e) => {
                tracing::error!(path = %path, error = %e, "Failed to render page");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        },
        None => {
            tracing::debug!(path = %path, "Unknown location, redirecting to root");
            Redirect::to(ROOT_PATH).into_response()
        }
    }
}
