//! Environment snapshot consumed to build the initial request.
//!
//! The four key/value sources are independent: server/environment
//! variables (method, protocol version and `HTTP_*` headers are derived
//! from these), cookies, query-string variables and parsed-body variables,
//! plus the raw input byte stream.

use crate::http::bag::Bag;
use crate::http::body::MessageBody;

/// Decoded request environment, the seam to the transport layer.
#[derive(Debug, Clone)]
pub struct Environment {
    pub server_params: Bag,
    pub cookie_params: Bag,
    pub query_params: Bag,
    pub parsed_body: Bag,
    pub body: MessageBody,
}

impl Environment {
    /// An empty environment with an empty body stream.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            server_params: Bag::new(),
            cookie_params: Bag::new(),
            query_params: Bag::new(),
            parsed_body: Bag::new(),
            body: MessageBody::empty(),
        }
    }
}
