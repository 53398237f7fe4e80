//! Routing error definitions.

use thiserror::Error;

/// Errors raised while matching requests or generating URLs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoutingError {
    /// No registered route matches the request method and path. A
    /// 404-class condition, recoverable by the caller.
    #[error("no route defined for {method} {path}")]
    NotFound { method: String, path: String },

    /// Reverse URL generation against a name absent from the table.
    #[error("cannot generate a URL for non-existent route {0:?}")]
    UnknownRoute(String),

    /// Reverse URL generation with an incomplete parameter set.
    #[error("route {route:?} is missing parameter {name:?}")]
    MissingParameter { route: String, name: String },
}
