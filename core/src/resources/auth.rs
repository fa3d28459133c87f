//! `oauth2/*`: the authorization URL and the code-for-token exchange.

use serde_json::Value;

use super::with_query;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::transport::{Endpoint, Transport};

const URI_AUTH: &str = "oauth2/authorize";
const URI_AUTH_TOKEN: &str = "oauth2/token";

/// OAuth authorization-code flow.
#[derive(Debug, Clone, Copy)]
pub struct Auth<'a> {
    transport: &'a Transport,
}

impl<'a> Auth<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// URL the user visits to authorize the application. No request is made.
    pub fn login_url(&self, query: Option<&str>) -> String {
        self.transport
            .endpoint_url(Endpoint::Kraken, &with_query(URI_AUTH, query))
    }

    /// Exchange an authorization code; `form` becomes the POST body.
    pub fn access_token(&self, form: Option<&str>) -> Result<Value> {
        self.transport.request(URI_AUTH_TOKEN, HttpMethod::Post, form)
    }
}
