//! HTTP message subsystem.
//!
//! # Data Flow
//! ```text
//! Environment snapshot (server / cookie / query / parsed-body sources)
//!     → environment.rs (snapshot type)
//!     → header_bag.rs (HTTP_* keys → normalized headers)
//!     → uri.rs (scheme/host/port/path/query from server params)
//!     → request.rs (immutable Request aggregate)
//!
//! Request transitions:
//!     Request ──with_*──▶ new Request (receiver unchanged)
//! ```
//!
//! # Design Decisions
//! - All message types are immutable values; mutators clone and return
//! - Header lookups are case-insensitive via one pure normalization function
//! - Bags are ordered maps with insertion-overwrite semantics
//! - The body stream is shared by handle, never copied per transition

pub mod bag;
pub mod body;
pub mod environment;
pub mod header_bag;
pub mod request;
pub mod uri;

pub use bag::Bag;
pub use body::MessageBody;
pub use environment::Environment;
pub use header_bag::HeaderBag;
pub use request::Request;
pub use uri::{Uri, UriError};
