//! Dashboard host subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → auth.rs (optional basic auth)
//!     → handlers.rs
//!         /api/routes*  → JSON view of the registry
//!         /{*path}      → registry lookup → page shell or redirect to '/'
//!     → response.rs (error bodies, HTML shell)
//! ```
//!
//! # Design Decisions
//! - Registry shared via Arc, read without locks
//! - Unknown locations redirect to the root: the fallback policy lives here,
//!   not in the registry

pub mod auth;
pub mod handlers;
pub mod response;
pub mod server;

pub use server::{check_servable, AppState, DashboardServer, HostError, API_PREFIX};
