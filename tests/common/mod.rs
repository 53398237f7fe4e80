//! Shared utilities for integration testing.

use http_kernel::{Bag, Environment, MessageBody};

/// Route table used by the integration tests.
pub const ROUTES: &str = r#"
[[routes]]
name = "list"
url = "/posts"
controller = "PostController"
action = "list"

[[routes]]
name = "show"
url = "/posts/{id}"
methods = ["GET"]
controller = "PostController"
action = "show"

[[routes]]
name = "entry"
url = "/blog/{year}/{slug}"
methods = ["GET", "HEAD"]
controller = "BlogController"
action = "entry"
"#;

/// Build an environment snapshot for the given method and request URI.
pub fn environment(method: &str, request_uri: &str) -> Environment {
    Environment {
        server_params: [
            ("REQUEST_METHOD", method),
            ("REQUEST_URI", request_uri),
            ("HTTP_HOST", "example.com"),
            ("SERVER_PROTOCOL", "HTTP/1.1"),
        ]
        .into_iter()
        .collect(),
        cookie_params: Bag::new(),
        query_params: Bag::new(),
        parsed_body: Bag::new(),
        body: MessageBody::empty(),
    }
}
