//! Route definition and pattern matching.
//!
//! # Responsibilities
//! - Hold a named URL pattern, its allowed methods and the
//!   controller/action target
//! - Compile the pattern once at registration into literal and
//!   placeholder segments
//! - Match requests and capture placeholder values
//! - Generate URLs from the pattern and a parameter set
//!
//! # Design Decisions
//! - Method membership is case-sensitive; no methods declared means GET
//! - Literal segments match exactly; trailing slashes are preserved,
//!   never normalized
//! - A placeholder captures exactly one non-empty path segment

use crate::http::request::Request;
use crate::routing::error::RoutingError;

/// One compiled pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A named URL pattern with a controller/action target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    name: String,
    pattern: String,
    methods: Vec<String>,
    controller: String,
    action: String,
    segments: Vec<Segment>,
}

impl Route {
    /// Create a route, compiling its pattern. An empty method list
    /// defaults to `GET`.
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        methods: Vec<String>,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        let pattern = pattern.into();
        let methods = if methods.is_empty() {
            vec!["GET".to_string()]
        } else {
            methods
        };
        let segments = compile(&pattern);
        Self {
            name: name.into(),
            pattern,
            methods,
            controller: controller.into(),
            action: action.into(),
            segments,
        }
    }

    /// The route's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw URL pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The allowed methods.
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// The controller reference.
    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// The action reference.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Placeholder names in template declaration order.
    pub fn placeholder_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match a request against this route.
    ///
    /// Returns the captured placeholders in template declaration order on
    /// a structural-and-method match, `None` otherwise. A method mismatch
    /// is a no-match, not an error.
    pub fn matches(&self, request: &Request) -> Option<Vec<(String, String)>> {
        if !self.methods.iter().any(|method| method == request.method()) {
            return None;
        }

        let parts: Vec<&str> = request.uri().path().split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut placeholders = Vec::new();
        for (segment, part) in self.segments.iter().zip(parts.iter().copied()) {
            match segment {
                Segment::Literal(literal) => {
                    if literal.as_str() != part {
                        return None;
                    }
                }
                Segment::Placeholder(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    placeholders.push((name.clone(), part.to_string()));
                }
            }
        }
        Some(placeholders)
    }

    /// Substitute each `{name}` in the pattern with the matching value.
    pub fn generate_url(&self, params: &[(&str, &str)]) -> Result<String, RoutingError> {
        let mut parts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => parts.push(literal.clone()),
                Segment::Placeholder(name) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| *key == name.as_str())
                        .map(|(_, value)| value.to_string())
                        .ok_or_else(|| RoutingError::MissingParameter {
                            route: self.name.clone(),
                            name: name.clone(),
                        })?;
                    parts.push(value);
                }
            }
        }
        Ok(parts.join("/"))
    }
}

/// Split a pattern into literal and placeholder segments. A segment is a
/// placeholder when it is wrapped in `{`/`}` with a non-empty name;
/// anything else is matched literally.
fn compile(pattern: &str) -> Vec<Segment> {
    pattern
        .split('/')
        .map(|part| {
            match part
                .strip_prefix('{')
                .and_then(|inner| inner.strip_suffix('}'))
            {
                Some(name) if !name.is_empty() => Segment::Placeholder(name.to_string()),
                _ => Segment::Literal(part.to_string()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
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
    fn test_placeholder_extraction() {
        let route = Route::new("show", "/users/{id}", vec![], "UserController", "show");

        assert_eq!(
            route.matches(&request("GET", "/users/42")),
            Some(vec![("id".to_string(), "42".to_string())])
        );
        assert_eq!(route.matches(&request("GET", "/users")), None);
        assert_eq!(route.matches(&request("GET", "/users/42/edit")), None);
    }

    #[test]
    fn test_placeholder_requires_non_empty_segment() {
        let route = Route::new("show", "/users/{id}", vec![], "UserController", "show");

        assert_eq!(route.matches(&request("GET", "/users/")), None);
    }

    #[test]
    fn test_multiple_placeholders_in_declaration_order() {
        let route = Route::new(
            "entry",
            "/blog/{year}/{slug}",
            vec![],
            "BlogController",
            "entry",
        );

        assert_eq!(
            route.matches(&request("GET", "/blog/2014/hello-world")),
            Some(vec![
                ("year".to_string(), "2014".to_string()),
                ("slug".to_string(), "hello-world".to_string()),
            ])
        );
    }

    #[test]
    fn test_method_mismatch_is_no_match() {
        let route = Route::new(
            "create",
            "/users",
            vec!["POST".to_string()],
            "UserController",
            "create",
        );

        assert!(route.matches(&request("POST", "/users")).is_some());
        assert_eq!(route.matches(&request("GET", "/users")), None);
        // Membership is case-sensitive
        assert_eq!(route.matches(&request("post", "/users")), None);
    }

    #[test]
    fn test_empty_method_list_defaults_to_get() {
        let route = Route::new("index", "/users", vec![], "UserController", "index");

        assert_eq!(route.methods(), ["GET"]);
        assert!(route.matches(&request("GET", "/users")).is_some());
        assert_eq!(route.matches(&request("POST", "/users")), None);
    }

    #[test]
    fn test_trailing_slash_is_significant() {
        let route = Route::new("index", "/users/", vec![], "UserController", "index");

        assert!(route.matches(&request("GET", "/users/")).is_some());
        assert_eq!(route.matches(&request("GET", "/users")), None);
    }

    #[test]
    fn test_generate_url() {
        let route = Route::new(
            "entry",
            "/blog/{year}/{slug}",
            vec![],
            "BlogController",
            "entry",
        );

        assert_eq!(
            route.generate_url(&[("year", "2014"), ("slug", "hello")]),
            Ok("/blog/2014/hello".to_string())
        );
    }

    #[test]
    fn test_generate_url_missing_parameter() {
        let route = Route::new("show", "/users/{id}", vec![], "UserController", "show");

        assert_eq!(
            route.generate_url(&[]),
            Err(RoutingError::MissingParameter {
                route: "show".to_string(),
                name: "id".to_string(),
            })
        );
    }

    #[test]
    fn test_placeholder_names() {
        let route = Route::new(
            "entry",
            "/blog/{year}/{slug}",
            vec![],
            "BlogController",
            "entry",
        );

        let names: Vec<&str> = route.placeholder_names().collect();
        assert_eq!(names, vec!["year", "slug"]);
    }
}
