//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request construction and routing produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → Log aggregation (stdout, file, remote)
//! ```
//!
//! # Design Decisions
//! - Structured logging with field-typed events, not formatted strings
//! - Filtering controlled by the environment, with a caller default
//! - The kernel only emits; subscriber installation belongs to the
//!   bootstrap and is offered here as a helper

pub mod logging;
