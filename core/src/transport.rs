//! Blocking HTTP transport for the Twitch API.
//!
//! # Design
//! A call is split into three steps: `build_request` produces an
//! `HttpRequest` (pure, no I/O), `execute` runs it through a shared
//! `ureq::Agent`, and the response is turned into an `ApiResponse`. Status and
//! headers are returned with the body, and a copy of the envelope is kept in a
//! single "last response" slot. Under concurrent use that slot is
//! last-writer-wins; read the returned `ApiResponse` when it matters.
//!
//! Non-2xx statuses are data, not errors: Twitch reports failures as JSON
//! bodies and callers inspect them.

use std::sync::{Mutex, PoisonError};

use serde_json::Value;
use tracing::{debug, warn};
use ureq::tls::TlsConfig;
use ureq::{Agent, RequestBuilder};

use crate::config::TransportConfig;
use crate::error::{Result, SdkError};
use crate::http::{decode_body, ApiResponse, Envelope, HttpMethod, HttpRequest};

const MIME_TYPE_PREFIX: &str = "application/vnd.twitchtv.v";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The two base URLs requests can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// The versioned Kraken API.
    Kraken,
    /// The legacy team API; paths get a `.json` suffix.
    Team,
}

/// Issues requests against the Kraken and team endpoints.
///
/// Holds the shared agent, the headers every request carries and the
/// envelope of the most recent call.
pub struct Transport {
    agent: Agent,
    config: TransportConfig,
    client_id: Option<String>,
    last: Mutex<Option<Envelope>>,
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("config", &self.config)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl Transport {
    pub fn new(config: TransportConfig) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_connect(Some(config.connect_timeout))
            .timeout_global(Some(config.timeout))
            .tls_config(
                TlsConfig::builder()
                    .disable_verification(!config.verify_tls)
                    .build(),
            )
            .build()
            .new_agent();
        Self {
            agent,
            config,
            client_id: None,
            last: Mutex::new(None),
        }
    }

    pub fn api_version(&self) -> u32 {
        self.config.api_version
    }

    /// Change the API version sent in `Accept`.
    ///
    /// Only all-digit input that fits a `u32` is accepted; anything else is
    /// ignored and the current version kept.
    pub fn set_api_version<V: ToString>(&mut self, version: V) {
        let raw = version.to_string();
        let parsed = if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            raw.parse::<u32>().ok()
        } else {
            None
        };
        match parsed {
            Some(v) => self.config.api_version = v,
            None => debug!(version = %raw, "ignoring invalid API version"),
        }
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn set_client_id(&mut self, client_id: Option<String>) {
        self.client_id = client_id;
    }

    /// `Accept` header value for the current API version.
    pub fn accept_header(&self) -> String {
        format!("{MIME_TYPE_PREFIX}{}+json", self.config.api_version)
    }

    /// Absolute URL for `path` on `endpoint`.
    pub fn endpoint_url(&self, endpoint: Endpoint, path: &str) -> String {
        match endpoint {
            Endpoint::Kraken => format!("{}{path}", self.config.kraken_base_url),
            Endpoint::Team => format!("{}{path}.json", self.config.team_base_url),
        }
    }

    /// Describe a request without sending it.
    ///
    /// A body has its single leading `?` removed and is sent form-encoded;
    /// PUT and DELETE bodies also carry an explicit `Content-Length`.
    pub fn build_request(
        &self,
        endpoint: Endpoint,
        path: &str,
        method: HttpMethod,
        body: Option<&str>,
    ) -> HttpRequest {
        let mut headers = vec![
            ("User-Agent".to_string(), self.config.user_agent.clone()),
            ("Accept".to_string(), self.accept_header()),
        ];
        if let Some(id) = &self.client_id {
            headers.push(("Client-ID".to_string(), id.clone()));
        }

        let body = match (method, body) {
            (HttpMethod::Get, _) | (_, None) => None,
            (_, Some(raw)) => Some(raw.strip_prefix('?').unwrap_or(raw).to_string()),
        };
        if let Some(body) = &body {
            headers.push(("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string()));
            if matches!(method, HttpMethod::Put | HttpMethod::Delete) {
                headers.push(("Content-Length".to_string(), body.len().to_string()));
            }
        }

        HttpRequest {
            method,
            url: self.endpoint_url(endpoint, path),
            headers,
            body,
        }
    }

    /// Kraken request returning only the decoded body.
    pub fn request(&self, path: &str, method: HttpMethod, body: Option<&str>) -> Result<Value> {
        let req = self.build_request(Endpoint::Kraken, path, method, body);
        self.send(&req).map(|resp| resp.body)
    }

    /// GET against the legacy team endpoint.
    pub fn team_request(&self, path: &str) -> Result<Value> {
        let req = self.build_request(Endpoint::Team, path, HttpMethod::Get, None);
        self.send(&req).map(|resp| resp.body)
    }

    /// Execute `req` and return its body with status and headers.
    pub fn send(&self, req: &HttpRequest) -> Result<ApiResponse> {
        debug!(method = %req.method, url = %redact_query(&req.url), "sending request");
        let response = match self.execute(req) {
            Ok(response) => response,
            Err(Failure {
                error: SdkError::Transport { message, code, .. },
                envelope,
            }) if self.config.suppress_transport_errors => {
                warn!(code, error = %message, "suppressing transport error");
                ApiResponse {
                    envelope,
                    body: Value::Null,
                }
            }
            Err(Failure { error, envelope }) => {
                self.store_last(envelope);
                return Err(error);
            }
        };
        self.store_last(response.envelope.clone());
        Ok(response)
    }

    /// Envelope of the most recent call on this transport.
    pub fn last_response(&self) -> Option<Envelope> {
        self.last
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store_last(&self, envelope: Envelope) {
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = Some(envelope);
    }

    fn execute(&self, req: &HttpRequest) -> Result<ApiResponse, Failure> {
        let url = req.url.as_str();
        let body = req.body.as_deref();
        let sent = match req.method {
            HttpMethod::Get => with_headers(self.agent.get(url), &req.headers).call(),
            HttpMethod::Post => send_body(with_headers(self.agent.post(url), &req.headers), body),
            HttpMethod::Put => send_body(with_headers(self.agent.put(url), &req.headers), body),
            HttpMethod::Delete => {
                let builder = with_headers(self.agent.delete(url), &req.headers);
                match body {
                    Some(body) => builder.force_send_body().send(body.as_bytes()),
                    None => builder.call(),
                }
            }
        };
        let mut response = sent.map_err(|err| Failure {
            error: SdkError::transport(err),
            envelope: Envelope::default(),
        })?;

        let mut envelope = Envelope {
            status: response.status().as_u16(),
            ..Envelope::default()
        };
        for (name, value) in response.headers() {
            envelope.capture_header(name.as_str(), &String::from_utf8_lossy(value.as_bytes()));
        }
        debug!(status = envelope.status, "received response");

        let raw = match response.body_mut().read_to_string() {
            Ok(raw) => raw,
            Err(err) => {
                return Err(Failure {
                    error: SdkError::transport(err),
                    envelope,
                })
            }
        };
        match decode_body(&raw) {
            Ok(body) => Ok(ApiResponse { envelope, body }),
            Err(error) => Err(Failure { error, envelope }),
        }
    }
}

/// A failed call together with whatever envelope was received before it failed.
struct Failure {
    error: SdkError,
    envelope: Envelope,
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn send_body(
    builder: RequestBuilder<ureq::typestate::WithBody>,
    body: Option<&str>,
) -> std::result::Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    match body {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}

/// Drop the query string so tokens never reach the logs.
fn redact_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}
