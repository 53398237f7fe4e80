//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → KernelConfig (validated, immutable)
//!     → RouterLayer::from_config (route table, frozen)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - An absent `routes` key is fatal at startup, not an empty table
//! - Validation separates syntactic (serde) from semantic checks and
//!   reports every violation, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::KernelConfig;
pub use schema::RouteEntry;
