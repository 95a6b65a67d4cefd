//! Dashboard views and the catalog that resolves route view references.
//!
//! The registry never looks inside a view handle. A catalog is the host's
//! statement of which views it can mount, so a table entry pointing at a
//! view the host does not have is caught at construction.

use std::fmt;

use serde::Serialize;

use crate::routing::{RegistryError, RouteDef, RouteRegistry};

/// Resolves textual view references to host-owned handles.
pub trait ViewCatalog {
    type View;

    /// Returns `None` when the host has no such view.
    fn resolve(&self, reference: &str) -> Option<Self::View>;
}

/// Views of the proxy server dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    Overview,
    OfflineClient,
    OnlineClient,
    ProxiesTcp,
    ProxiesUdp,
    ProxiesFtp,
    ProxiesHttp,
    ProxiesHttps,
    Search,
}

impl View {
    pub const ALL: [View; 9] = [
        View::Overview,
        View::OfflineClient,
        View::OnlineClient,
        View::ProxiesTcp,
        View::ProxiesUdp,
        View::ProxiesFtp,
        View::ProxiesHttp,
        View::ProxiesHttps,
        View::Search,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::OfflineClient => "OfflineClient",
            View::OnlineClient => "OnlineClient",
            View::ProxiesTcp => "ProxiesTcp",
            View::ProxiesUdp => "ProxiesUdp",
            View::ProxiesFtp => "ProxiesFtp",
            View::ProxiesHttp => "ProxiesHttp",
            View::ProxiesHttps => "ProxiesHttps",
            View::Search => "Search",
        }
    }

    /// Menu label shown by the host.
    pub fn title(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::OfflineClient => "Offline Clients",
            View::OnlineClient => "Online Clients",
            View::ProxiesTcp => "TCP Proxies",
            View::ProxiesUdp => "UDP Proxies",
            View::ProxiesFtp => "FTP Proxies",
            View::ProxiesHttp => "HTTP Proxies",
            View::ProxiesHttps => "HTTPS Proxies",
            View::Search => "Search",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog of the built-in dashboard views, matched by exact name.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardViews;

impl ViewCatalog for DashboardViews {
    type View = View;

    fn resolve(&self, reference: &str) -> Option<View> {
        View::ALL.into_iter().find(|v| v.as_str() == reference)
    }
}

/// The dashboard route table in menu order.
pub fn dashboard_routes() -> Vec<RouteDef> {
    vec![
        RouteDef::new("/", "Overview", "Overview"),
        RouteDef::new("/client/offline", "OfflineClient", "OfflineClient"),
        RouteDef::new("/client/online", "OnlineClient", "OnlineClient"),
        RouteDef::new("/proxies/tcp", "ProxiesTcp", "ProxiesTcp"),
        RouteDef::new("/proxies/udp", "ProxiesUdp", "ProxiesUdp"),
        RouteDef::new("/proxies/ftp", "ProxiesFtp", "ProxiesFtp"),
        RouteDef::new("/proxies/http", "ProxiesHttp", "ProxiesHttp"),
        RouteDef::new("/proxies/https", "ProxiesHttps", "ProxiesHttps"),
        RouteDef::new("/search", "Search", "Search"),
    ]
}

/// Registry over [`dashboard_routes`].
pub fn dashboard_registry() -> Result<RouteRegistry<View>, RegistryError> {
    RouteRegistry::new(dashboard_routes(), &DashboardViews)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_resolves_every_view() {
        for view in View::ALL {
            assert_eq!(DashboardViews.resolve(view.as_str()), Some(view));
        }
    }

    #[test]
    fn test_catalog_is_exact() {
        assert_eq!(DashboardViews.resolve("overview"), None);
        assert_eq!(DashboardViews.resolve(""), None);
        assert_eq!(DashboardViews.resolve("ProxiesStcp"), None);
    }

    #[test]
    fn test_builtin_table_is_valid() {
        let registry = dashboard_registry().unwrap();
        assert_eq!(registry.len(), 9);
        for entry in &registry {
            assert_eq!(entry.view().as_str(), entry.name());
        }
    }

    #[test]
    fn test_view_serializes_as_name() {
        assert_eq!(serde_json::to_string(&View::ProxiesHttps).unwrap(), "\"ProxiesHttps\"");
    }
}
