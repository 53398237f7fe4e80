//! Immutable HTTP request.
//!
//! # Responsibilities
//! - Aggregate method, URI, headers, body and the five parameter bags
//! - Provide copy-on-write `with_*` transitions; the receiver is never
//!   observably altered
//! - Build the initial request from an environment snapshot
//!
//! # Design Decisions
//! - Transitions clone every composite field; the body stream handle is
//!   the single deliberate exception (reference swap, no content copy)
//! - The Host header is a computed view: when no explicit non-empty Host
//!   header is stored, it is synthesized from the URI host
//! - Bag mutators merge additively; removal deletes exactly the named key

use serde_json::Value;

use crate::http::bag::Bag;
use crate::http::body::MessageBody;
use crate::http::environment::Environment;
use crate::http::header_bag::{normalize_name, HeaderBag};
use crate::http::uri::{Uri, UriError};

/// Immutable HTTP request value.
#[derive(Debug, Clone)]
pub struct Request {
    method: String,
    uri: Uri,
    headers: HeaderBag,
    body: MessageBody,
    server_params: Bag,
    cookie_params: Bag,
    query_params: Bag,
    parsed_body: Bag,
    attributes: Bag,
    protocol_version: String,
}

impl Request {
    /// Construct a request from all of its parts. `protocol_version`
    /// defaults to `"1.1"` when `None`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        method: impl Into<String>,
        uri: Uri,
        headers: HeaderBag,
        cookie_params: Bag,
        server_params: Bag,
        query_params: Bag,
        parsed_body: Bag,
        attributes: Bag,
        body: MessageBody,
        protocol_version: Option<String>,
    ) -> Self {
        Self {
            method: method.into(),
            uri,
            headers,
            body,
            server_params,
            cookie_params,
            query_params,
            parsed_body,
            attributes,
            protocol_version: protocol_version.unwrap_or_else(|| "1.1".to_string()),
        }
    }

    /// Build a request from an environment snapshot.
    ///
    /// The method comes from the first `X-Http-Method-Override` header
    /// value when present, else from the `REQUEST_METHOD` server param.
    /// The protocol version comes from `SERVER_PROTOCOL` (`"HTTP/x.y"`).
    pub fn from_environment(environment: Environment) -> Result<Self, UriError> {
        let Environment {
            server_params,
            cookie_params,
            query_params,
            parsed_body,
            body,
        } = environment;

        let headers = HeaderBag::from_environment(&server_params);

        let method = headers
            .get("X-Http-Method-Override")
            .first()
            .cloned()
            .or_else(|| server_params.get_str("REQUEST_METHOD").map(str::to_string))
            .unwrap_or_else(|| "GET".to_string());

        let uri = Uri::from_environment(&server_params)?;

        let protocol_version = server_params
            .get_str("SERVER_PROTOCOL")
            .and_then(|protocol| protocol.strip_prefix("HTTP/"))
            .unwrap_or("1.1")
            .to_string();

        tracing::debug!(
            method = %method,
            path = %uri.path(),
            protocol = %protocol_version,
            "Request built from environment"
        );

        Ok(Self {
            method,
            uri,
            headers,
            body,
            server_params,
            cookie_params,
            query_params,
            parsed_body,
            attributes: Bag::new(),
            protocol_version,
        })
    }

    /// The HTTP method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The request URI.
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// The HTTP protocol version, e.g. `"1.1"`.
    pub fn protocol_version(&self) -> &str {
        &self.protocol_version
    }

    /// The body stream.
    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    /// All headers. When no explicit non-empty Host header is stored and
    /// the URI carries a host, the Host entry is synthesized from the URI;
    /// stored state is never touched.
    pub fn headers(&self) -> HeaderBag {
        if !self.should_synthesize_host() {
            return self.headers.clone();
        }

        let mut result = HeaderBag::new();
        let mut replaced = false;
        for (name, values) in self.headers.iter() {
            if name == "Host" {
                result.add("Host", self.uri.host());
                replaced = true;
            } else {
                for value in values {
                    result.add(name, value.clone());
                }
            }
        }
        if !replaced {
            result.add("Host", self.uri.host());
        }
        result
    }

    /// Values for one header, with the same Host synthesis as [`headers`].
    ///
    /// [`headers`]: Request::headers
    pub fn header(&self, name: &str) -> Vec<String> {
        if normalize_name(name) == "Host" && self.should_synthesize_host() {
            return vec![self.uri.host().to_string()];
        }
        self.headers.get(name).to_vec()
    }

    /// The header's values joined with commas.
    pub fn header_line(&self, name: &str) -> String {
        self.header(name).join(",")
    }

    /// Whether the named header is stored.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.has(name)
    }

    fn should_synthesize_host(&self) -> bool {
        let stored = self.headers.get("Host");
        let missing = stored.first().map(String::is_empty).unwrap_or(true);
        missing && !self.uri.host().is_empty()
    }

    /// Server/environment parameters.
    pub fn server_params(&self) -> &Bag {
        &self.server_params
    }

    /// Cookie parameters.
    pub fn cookie_params(&self) -> &Bag {
        &self.cookie_params
    }

    /// Query-string parameters.
    pub fn query_params(&self) -> &Bag {
        &self.query_params
    }

    /// Parsed body parameters.
    pub fn parsed_body(&self) -> &Bag {
        &self.parsed_body
    }

    /// Application-derived attributes.
    pub fn attributes(&self) -> &Bag {
        &self.attributes
    }

    /// One attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// New request with the given protocol version.
    pub fn with_protocol_version(&self, version: impl Into<String>) -> Self {
        let mut clone = self.clone();
        clone.protocol_version = version.into();
        clone
    }

    /// New request with the given method.
    pub fn with_method(&self, method: impl Into<String>) -> Self {
        let mut clone = self.clone();
        clone.method = method.into();
        clone
    }

    /// New request with the named header replaced by the given value.
    pub fn with_header(&self, name: &str, value: impl Into<String>) -> Self {
        let mut clone = self.clone();
        clone.headers.remove(name);
        clone.headers.add(name, value);
        clone
    }

    /// New request with the given value appended to the named header.
    pub fn with_added_header(&self, name: &str, value: impl Into<String>) -> Self {
        let mut clone = self.clone();
        clone.headers.add(name, value);
        clone
    }

    /// New request without the named header.
    pub fn without_header(&self, name: &str) -> Self {
        let mut clone = self.clone();
        clone.headers.remove(name);
        clone
    }

    /// New request with the given body stream. Only the reference moves;
    /// no stream content is copied.
    pub fn with_body(&self, body: MessageBody) -> Self {
        let mut clone = self.clone();
        clone.body = body;
        clone
    }

    /// New request with the given URI.
    ///
    /// When the new URI carries no host, or `preserve_host` is set, the
    /// returned request keeps the original URI host so Host resolution
    /// stays consistent.
    pub fn with_uri(&self, uri: Uri, preserve_host: bool) -> Self {
        let mut clone = self.clone();
        clone.uri = if uri.host().is_empty() || preserve_host {
            uri.with_host(self.uri.host())
        } else {
            uri
        };
        clone
    }

    /// New request with the given entries merged into the cookie bag.
    pub fn with_cookie_params(&self, params: Bag) -> Self {
        let mut clone = self.clone();
        for (key, value) in params {
            clone.cookie_params.add(key, value);
        }
        clone
    }

    /// New request with the given entries merged into the query bag.
    pub fn with_query_params(&self, params: Bag) -> Self {
        let mut clone = self.clone();
        for (key, value) in params {
            clone.query_params.add(key, value);
        }
        clone
    }

    /// New request with the given entries merged into the parsed body bag.
    pub fn with_parsed_body(&self, params: Bag) -> Self {
        let mut clone = self.clone();
        for (key, value) in params {
            clone.parsed_body.add(key, value);
        }
        clone
    }

    /// New request with one attribute set.
    pub fn with_attribute(&self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut clone = self.clone();
        clone.attributes.add(name, value);
        clone
    }

    /// New request without the named attribute.
    pub fn without_attribute(&self, name: &str) -> Self {
        let mut clone = self.clone();
        clone.attributes.remove(name);
        clone
    }
}
