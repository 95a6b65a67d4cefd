//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! dashboard host. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

use crate::routing::RouteDef;
use crate::views::dashboard_routes;

/// Root configuration for the dashboard host.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DashboardConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Basic auth credentials for the dashboard.
    pub auth: AuthConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route table override. The built-in dashboard table is used when absent.
    pub routes: Option<Vec<RouteDef>>,
}

impl DashboardConfig {
    /// The route table this config selects.
    pub fn route_table(&self) -> Vec<RouteDef> {
        self.routes.clone().unwrap_or_else(dashboard_routes)
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:7500").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:7500".to_string(),
        }
    }
}

/// Dashboard credentials. Both empty disables authentication.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    pub user: String,
    pub password: String,
}

impl AuthConfig {
    pub fn enabled(&self) -> bool {
        !(self.user.is_empty() && self.password.is_empty())
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 10 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter directives, overridden by `RUST_LOG`.
    pub log_filter: String,

    /// Emit JSON log lines instead of human-readable ones.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "dashboard_routes=info,tower_http=info".to_string(),
            json_logs: false,
        }
    }
}
