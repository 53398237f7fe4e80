//! Match notification hook.
//!
//! Purely informational side channel: on a successful match the router
//! hands the matched route to an injected observer (a debugging UI, an
//! event bus adapter). Absence of an observer never affects control flow
//! and no return value is consumed.

use std::fmt;

use crate::routing::route::Route;

/// Payload handed to observers when a route matches.
#[derive(Debug)]
pub struct RouteMatched<'a> {
    /// The route that matched.
    pub route: &'a Route,
}

/// Observer notified after each successful match.
pub trait MatchObserver: Send + Sync + fmt::Debug {
    fn route_matched(&self, event: RouteMatched<'_>);
}
