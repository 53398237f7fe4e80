//! HTTP request abstraction and route-matching engine.
//!
//! # Data Flow
//! ```text
//! Environment snapshot (server / cookie / query / body sources)
//!     → http (Uri + HeaderBag construction, immutable Request)
//!     → routing (match against registered route table)
//!     → tagged Request (_controller + placeholder attributes)
//!     → dispatch layer (external)
//! ```
//!
//! Requests are immutable values: every `with_*` call returns a new
//! instance and leaves the receiver untouched. The route table is built
//! once from configuration and is read-only afterwards.

// Core subsystems
pub mod config;
pub mod http;
pub mod routing;

// Cross-cutting concerns
pub mod observability;

pub use config::schema::{KernelConfig, RouteEntry};
pub use http::{Bag, Environment, HeaderBag, MessageBody, Request, Uri};
pub use routing::{Route, RouterLayer, RoutingError};
