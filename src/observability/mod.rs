//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Host process produces:
//!     → logging.rs (structured log events)
//!     → tower-http TraceLayer (request spans)
//!
//! Consumers:
//!     → stdout (plain for development, JSON for log aggregation)
//! ```
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - The route registry itself never logs; the host reports outcomes

pub mod logging;

pub use logging::init_logging;
