//! Route definitions and resolved entries.

use serde::{Deserialize, Serialize};

use crate::routing::error::RouteDefect;

/// Path of the default landing destination.
pub const ROOT_PATH: &str = "/";

/// A route as written in a table, before its view is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RouteDef {
    /// URL path, e.g. `/proxies/tcp`.
    pub path: String,

    /// Symbolic name, e.g. `ProxiesTcp`.
    pub name: String,

    /// Textual reference to the view, resolved through a catalog.
    pub view: String,
}

impl RouteDef {
    /// Create a route definition from its path, name and view reference.
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view: view.into(),
        }
    }

    /// Shape checks that do not depend on the rest of the table.
    pub(crate) fn check_shape(&self, index: usize, defects: &mut Vec<RouteDefect>) {
        if let Some(reason) = path_problem(&self.path) {
            defects.push(RouteDefect::MalformedPath {
                index,
                path: self.path.clone(),
                reason,
            });
        }
        if self.name.is_empty() || self.name.chars().any(char::is_whitespace) {
            defects.push(RouteDefect::MalformedName {
                index,
                name: self.name.clone(),
            });
        }
    }
}

fn path_problem(path: &str) -> Option<&'static str> {
    if path.is_empty() {
        return Some("path is empty");
    }
    if !path.starts_with('/') {
        return Some("path must start with '/'");
    }
    if path.chars().any(char::is_whitespace) {
        return Some("path contains whitespace");
    }
    // Hosts see the request path still percent-encoded, so a path that needs
    // encoding could never be matched.
    if !path.is_ascii() {
        return Some("path contains non-ASCII characters");
    }
    if path.contains(['?', '#']) {
        return Some("path contains a query or fragment");
    }
    if path.contains(['%', '"', '<', '>', '`', '{', '}', '|', '\\', '^'])
        || path.chars().any(|c| c.is_ascii_control())
    {
        return Some("path contains characters that need percent-encoding");
    }
    // Parameterized and wildcard segments are not supported.
    if path.contains(':') || path.contains('*') {
        return Some("path contains pattern characters");
    }
    if path.contains("//") {
        return Some("path contains an empty segment");
    }
    if path != ROOT_PATH && path.ends_with('/') {
        return Some("path has a trailing slash");
    }
    None
}

/// A validated route bound to a view handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry<V> {
    path: String,
    name: String,
    view: V,
}

impl<V> RouteEntry<V> {
    pub(crate) fn new(path: String, name: String, view: V) -> Self {
        Self { path, name, view }
    }

    /// The URL path this entry is bound to.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The symbolic name used for navigation by name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The opaque view handle. Only the host knows how to mount it.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Whether this is the landing destination at `/`.
    pub fn is_root(&self) -> bool {
        self.path == ROOT_PATH
    }
}
