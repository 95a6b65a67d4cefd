//! Route registry and host for the proxy server dashboard.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod views;

pub use config::DashboardConfig;
pub use http::DashboardServer;
pub use lifecycle::Shutdown;
pub use routing::{RegistryError, RouteDef, RouteEntry, RouteRegistry};
pub use views::{dashboard_registry, dashboard_routes, DashboardViews, View, ViewCatalog};
