//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (ordered route table, first match wins)
//!     → route.rs (method check + compiled pattern match)
//!     → Return: tagged Request or explicit NotFound
//!
//! Route Compilation (at startup):
//!     RouteEntry[] from configuration
//!     → Compile patterns (literal / placeholder segments)
//!     → Freeze as read-only table
//! ```
//!
//! # Design Decisions
//! - Patterns compiled once at registration, reused for every match
//! - No regex in the match path (segment comparison only)
//! - Deterministic: registration order is the only tie-break
//! - Explicit NotFound rather than silent default

pub mod error;
pub mod event;
pub mod route;
pub mod router;

pub use error::RoutingError;
pub use event::{MatchObserver, RouteMatched};
pub use route::Route;
pub use router::RouterLayer;
