//! Route table and request tagging.
//!
//! # Responsibilities
//! - Store routes in registration order
//! - Match an incoming request against the table, first match wins
//! - Tag the matched request with dispatch attributes
//! - Generate URLs by route name
//!
//! # Design Decisions
//! - Registration order is the match-priority order; no specificity
//!   ranking
//! - Re-registering a name overwrites the route in place
//! - Read-only after construction, shareable across requests
//! - Match notifications go to an optional injected observer

use serde_json::json;

use crate::config::schema::RouteEntry;
use crate::http::request::Request;
use crate::routing::error::RoutingError;
use crate::routing::event::{MatchObserver, RouteMatched};
use crate::routing::route::Route;

/// Ordered table of routes; tags requests for the dispatch layer.
#[derive(Debug, Default)]
pub struct RouterLayer {
    routes: Vec<Route>,
    observer: Option<Box<dyn MatchObserver>>,
}

impl RouterLayer {
    /// Create an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a router from configuration entries, in order.
    pub fn from_config(entries: Vec<RouteEntry>) -> Self {
        let mut router = Self::new();
        for entry in entries {
            router.add_route(
                entry.name,
                entry.url,
                entry.methods.unwrap_or_default(),
                entry.controller,
                entry.action,
            );
        }
        router
    }

    /// Attach a match observer.
    pub fn with_observer(mut self, observer: Box<dyn MatchObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Register a route. A name already in the table is overwritten in
    /// place, keeping its priority position.
    pub fn add_route(
        &mut self,
        name: impl Into<String>,
        pattern: impl Into<String>,
        methods: Vec<String>,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) {
        let route = Route::new(name, pattern, methods, controller, action);
        tracing::debug!(
            name = %route.name(),
            pattern = %route.pattern(),
            "Route registered"
        );
        match self.routes.iter().position(|r| r.name() == route.name()) {
            Some(index) => self.routes[index] = route,
            None => self.routes.push(route),
        }
    }

    /// The registered routes in priority order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Match a request against the table.
    ///
    /// Returns a new request tagged with a `_controller` attribute
    /// (`{"class": ..., "method": ...}`) and one attribute per captured
    /// placeholder. The first route whose method and pattern both match
    /// wins.
    pub fn match_request(&self, request: &Request) -> Result<Request, RoutingError> {
        for route in &self.routes {
            let Some(placeholders) = route.matches(request) else {
                continue;
            };

            if let Some(observer) = &self.observer {
                observer.route_matched(RouteMatched { route });
            }

            tracing::debug!(
                route = %route.name(),
                method = %request.method(),
                path = %request.uri().path(),
                "Route matched"
            );

            let mut tagged = request.with_attribute(
                "_controller",
                json!({
                    "class": route.controller(),
                    "method": route.action(),
                }),
            );
            for (name, value) in placeholders {
                tagged = tagged.with_attribute(name, value);
            }
            return Ok(tagged);
        }

        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "No route matched"
        );
        Err(RoutingError::NotFound {
            method: request.method().to_string(),
            path: request.uri().path().to_string(),
        })
    }

    /// Generate a URL from a route name and parameters.
    pub fn generate_url(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RoutingError> {
        let route = self
            .routes
            .iter()
            .find(|route| route.name() == name)
            .ok_or_else(|| RoutingError::UnknownRoute(name.to_string()))?;
        route.generate_url(params)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::http::bag::Bag;
    use crate::http::body::MessageBody;
    use crate::http::header_bag::HeaderBag;
    use crate::http::uri::Uri;

    fn request(method: &str, path: &str) -> Request {
        Request::new(
            method,
            Uri::new("http", "example.com", None, path),
            HeaderBag::new(),
            Bag::new(),
            Bag::new(),
            Bag::new(),
            Bag::new(),
            Bag::new(),
            MessageBody::empty(),
            None,
        )
    }

    #[test]
    fn test_match_tags_controller_and_placeholders() {
        let mut router = RouterLayer::new();
        router.add_route(
            "show",
            "/posts/{id}",
            vec!["GET".to_string()],
            "PostController",
            "show",
        );

        let tagged = router.match_request(&request("GET", "/posts/7")).unwrap();

        assert_eq!(
            tagged.attribute("_controller"),
            Some(&json!({"class": "PostController", "method": "show"}))
        );
        assert_eq!(tagged.attribute("id"), Some(&"7".into()));
    }

    #[test]
    fn test_no_match_is_not_found() {
        let mut router = RouterLayer::new();
        router.add_route(
            "show",
            "/posts/{id}",
            vec!["GET".to_string()],
            "PostController",
            "show",
        );

        let err = router
            .match_request(&request("POST", "/posts/7"))
            .unwrap_err();
        assert_eq!(
            err,
            RoutingError::NotFound {
                method: "POST".to_string(),
                path: "/posts/7".to_string(),
            }
        );
    }

    #[test]
    fn test_first_registered_route_wins() {
        let mut router = RouterLayer::new();
        router.add_route("first", "/posts/{id}", vec![], "FirstController", "show");
        router.add_route("second", "/posts/{id}", vec![], "SecondController", "show");

        let tagged = router.match_request(&request("GET", "/posts/7")).unwrap();

        assert_eq!(
            tagged.attribute("_controller"),
            Some(&json!({"class": "FirstController", "method": "show"}))
        );
    }

    #[test]
    fn test_receiver_is_unchanged_by_match() {
        let mut router = RouterLayer::new();
        router.add_route("show", "/posts/{id}", vec![], "PostController", "show");

        let original = request("GET", "/posts/7");
        let _ = router.match_request(&original).unwrap();

        assert!(original.attributes().is_empty());
    }

    #[test]
    fn test_placeholder_overwrites_existing_attribute() {
        let mut router = RouterLayer::new();
        router.add_route("show", "/posts/{id}", vec![], "PostController", "show");

        let original = request("GET", "/posts/7").with_attribute("id", "stale");
        let tagged = router.match_request(&original).unwrap();

        assert_eq!(tagged.attribute("id"), Some(&"7".into()));
    }

    #[test]
    fn test_re_registering_a_name_overwrites_in_place() {
        let mut router = RouterLayer::new();
        router.add_route("show", "/posts/{id}", vec![], "OldController", "show");
        router.add_route("list", "/posts", vec![], "PostController", "list");
        router.add_route("show", "/articles/{id}", vec![], "ArticleController", "show");

        assert_eq!(router.routes().len(), 2);
        assert_eq!(router.routes()[0].name(), "show");
        assert_eq!(router.routes()[0].pattern(), "/articles/{id}");
        assert!(router.match_request(&request("GET", "/posts/7")).is_err());
    }

    #[test]
    fn test_from_config_preserves_order() {
        let router = RouterLayer::from_config(vec![
            RouteEntry {
                name: "list".to_string(),
                url: "/posts".to_string(),
                methods: None,
                controller: "PostController".to_string(),
                action: "list".to_string(),
            },
            RouteEntry {
                name: "show".to_string(),
                url: "/posts/{id}".to_string(),
                methods: Some(vec!["GET".to_string(), "HEAD".to_string()]),
                controller: "PostController".to_string(),
                action: "show".to_string(),
            },
        ]);

        assert_eq!(router.routes().len(), 2);
        assert_eq!(router.routes()[0].name(), "list");
        assert_eq!(router.routes()[1].methods(), ["GET", "HEAD"]);
    }

    #[test]
    fn test_generate_url() {
        let mut router = RouterLayer::new();
        router.add_route("show", "/posts/{id}", vec![], "PostController", "show");

        assert_eq!(
            router.generate_url("show", &[("id", "7")]),
            Ok("/posts/7".to_string())
        );
        assert_eq!(
            router.generate_url("missing", &[]),
            Err(RoutingError::UnknownRoute("missing".to_string()))
        );
    }

    #[derive(Debug)]
    struct CountingObserver {
        matches: Arc<AtomicUsize>,
    }

    impl MatchObserver for CountingObserver {
        fn route_matched(&self, event: RouteMatched<'_>) {
            assert_eq!(event.route.name(), "show");
            self.matches.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_observer_notified_on_match_only() {
        let matches = Arc::new(AtomicUsize::new(0));
        let observer = CountingObserver {
            matches: matches.clone(),
        };

        let mut router = RouterLayer::new();
        router.add_route("show", "/posts/{id}", vec![], "PostController", "show");
        let router = router.with_observer(Box::new(observer));

        let _ = router.match_request(&request("GET", "/posts/7")).unwrap();
        assert_eq!(matches.load(Ordering::SeqCst), 1);

        let _ = router.match_request(&request("GET", "/nope"));
        assert_eq!(matches.load(Ordering::SeqCst), 1);
    }
}
