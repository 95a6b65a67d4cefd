//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Construction (at startup):
//!     RouteDef[] (literal table or config file)
//!     → entry.rs (check path/name shape)
//!     → views catalog (resolve view reference to a handle)
//!     → registry.rs (uniqueness + root checks, index by path and name)
//!     → Freeze as immutable RouteRegistry, shared via Arc
//!
//! Navigation (at runtime):
//!     current location / symbolic name
//!     → registry.rs (exact lookup)
//!     → Return: matched RouteEntry or None
//! ```
//!
//! # Design Decisions
//! - Routes validated once at startup, immutable at runtime
//! - Exact matching only: no patterns, prefixes or wildcards
//! - Every defect in a table is reported, not just the first
//! - A miss is `None`; the host owns the fallback policy

pub mod entry;
pub mod error;
pub mod registry;

pub use entry::{RouteDef, RouteEntry, ROOT_PATH};
pub use error::{RegistryError, RouteDefect};
pub use registry::RouteRegistry;
