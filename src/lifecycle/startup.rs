//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Build the route registry from the configured table
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - No partial registry: every table defect is reported at once

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::config::{load_config, ConfigError, DashboardConfig};
use crate::http::{check_servable, HostError};
use crate::routing::{RegistryError, RouteRegistry};
use crate::views::{DashboardViews, View};

/// Reasons the host refuses to start.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Host(#[from] HostError),
}

/// Load config (or defaults when `path` is `None`) and build the registry.
pub fn bootstrap(
    path: Option<&Path>,
) -> Result<(DashboardConfig, Arc<RouteRegistry<View>>), StartupError> {
    let config = match path {
        Some(path) => load_config(path)?,
        None => DashboardConfig::default(),
    };

    let registry = RouteRegistry::new(config.route_table(), &DashboardViews)?;
    check_servable(&registry)?;

    tracing::debug!(
        routes = registry.len(),
        custom_table = config.routes.is_some(),
        "Route registry built"
    );

    Ok((config, Arc::new(registry)))
}
