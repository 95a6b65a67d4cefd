//! Response bodies produced by the dashboard host.
//!
//! # Responsibilities
//! - Map lookup misses on the JSON API to 404 bodies
//! - Render the page shell for a resolved destination
//!
//! # Design Decisions
//! - The shell only names the active view; the client mounts it
//! - Menu order is registry order
//! - Markup lives in `templates/shell.html`; askama escapes every value

use askama::Template;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::routing::{RouteEntry, RouteRegistry};
use crate::views::View;

/// Errors returned by the JSON API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no route named '{0}'")]
    UnknownName(String),

    #[error("no route for path '{0}'")]
    UnknownPath(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::NOT_FOUND, body).into_response()
    }
}

struct MenuItem<'a> {
    path: &'a str,
    name: &'a str,
    title: &'a str,
    active: bool,
}

#[derive(Template)]
#[template(path = "shell.html")]
struct ShellTemplate<'a> {
    title: &'a str,
    name: &'a str,
    view: &'a str,
    menu: Vec<MenuItem<'a>>,
}

/// HTML shell with the navigation menu and the active view marked.
pub fn render_shell(
    registry: &RouteRegistry<View>,
    active: &RouteEntry<View>,
) -> Result<String, askama::Error> {
    let menu = registry
        .iter()
        .map(|entry| MenuItem {
            path: entry.path(),
            name: entry.name(),
            title: entry.view().title(),
            active: entry == active,
        })
        .collect();

    ShellTemplate {
        title: active.view().title(),
        name: active.name(),
        view: active.view().as_str(),
        menu,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteDef;
    use crate::views::{dashboard_registry, DashboardViews};

    #[test]
    fn test_shell_marks_active_view() {
        let registry = dashboard_registry().unwrap();
        let active = registry.resolve_by_name("ProxiesUdp").unwrap();
        let html = render_shell(&registry, active).unwrap();

        assert!(html.contains("<title>UDP Proxies - Dashboard</title>"));
        assert!(html.contains("data-view=\"ProxiesUdp\""));
        let active_items: Vec<&str> = html.lines().filter(|l| l.contains("class=\"active\"")).collect();
        assert_eq!(active_items.len(), 1);
        assert!(active_items[0].contains("data-route=\"ProxiesUdp\""));
        assert_eq!(html.matches("<li").count(), 9);
    }

    #[test]
    fn test_menu_follows_registry_order() {
        let registry = dashboard_registry().unwrap();
        let html = render_shell(&registry, registry.root()).unwrap();
        let overview = html.find("data-route=\"Overview\"").unwrap();
        let search = html.find("data-route=\"Search\"").unwrap();
        assert!(overview < search);
    }

    #[test]
    fn test_values_are_escaped() {
        let registry = RouteRegistry::new(
            vec![
                RouteDef::new("/", "Overview", "Overview"),
                RouteDef::new("/search", "<Search>&\"", "Search"),
            ],
            &DashboardViews,
        )
        .unwrap();
        let active = registry.resolve_by_path("/search").unwrap();
        let html = render_shell(&registry, active).unwrap();

        assert!(!html.contains("<Search>"));
        assert!(html.contains("&lt;Search&gt;&amp;&quot;"));
    }
}
