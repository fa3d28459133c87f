//! HTTP plain-data types shared by `Transport` and the resource clients.
//!
//! # Design
//! A request is first described as an `HttpRequest` value and only then
//! executed, so request construction (URL, headers, body shaping) can be
//! tested without a network. Responses come back as an `ApiResponse`: the
//! decoded body plus an `Envelope` holding the status and captured headers.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, SdkError};

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Built by `Transport::build_request` and executed by `Transport::send`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header value with the given name, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Captured response headers, keyed by normalized name.
pub type ResponseHeaders = BTreeMap<String, String>;

/// Status and headers of one response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Envelope {
    pub status: u16,
    pub headers: ResponseHeaders,
}

impl Envelope {
    /// Record a header; a repeated name overwrites the earlier value.
    pub fn capture_header(&mut self, name: &str, value: &str) {
        self.headers
            .insert(normalize_header_name(name), value.trim().to_string());
    }

    /// Header value by normalized or raw name (`Content-Type` or `content_type`).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&normalize_header_name(name))
            .map(String::as_str)
    }
}

/// Decoded body of one response together with its envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub envelope: Envelope,
    pub body: Value,
}

impl ApiResponse {
    pub fn status(&self) -> u16 {
        self.envelope.status
    }

    /// Deserialize the body into a typed shape.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.body.clone()).map_err(SdkError::decode)
    }
}

/// Lower-case a header name and turn `-` into `_`.
pub fn normalize_header_name(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('-', "_")
}

/// Split a raw `Name: value` header line at its first colon.
///
/// Lines without a colon, or with nothing before it (status lines, blank
/// separators), yield `None`.
pub fn parse_header_line(line: &str) -> Option<(String, String)> {
    let (name, value) = line.split_once(':')?;
    if name.trim().is_empty() {
        return None;
    }
    Some((normalize_header_name(name), value.trim().to_string()))
}

/// Decode a response body. An empty body is `Null`; anything else must be JSON.
pub fn decode_body(raw: &str) -> Result<Value> {
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(raw).map_err(SdkError::decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_line_is_normalized() {
        assert_eq!(
            parse_header_line("Content-Type: application/json"),
            Some(("content_type".to_string(), "application/json".to_string()))
        );
    }

    #[test]
    fn header_line_splits_at_first_colon() {
        assert_eq!(
            parse_header_line("Location:  https://example.com:8080/x \r\n"),
            Some(("location".to_string(), "https://example.com:8080/x".to_string()))
        );
    }

    #[test]
    fn header_line_without_name_is_skipped() {
        assert_eq!(parse_header_line("HTTP/1.1 200 OK"), None);
        assert_eq!(parse_header_line(": orphan"), None);
        assert_eq!(parse_header_line("\r\n"), None);
    }

    #[test]
    fn last_header_occurrence_wins() {
        let mut env = Envelope::default();
        env.capture_header("X-Rate-Limit", "10");
        env.capture_header("x-rate-limit", " 9 ");
        assert_eq!(env.headers.len(), 1);
        assert_eq!(env.header("X-Rate-Limit"), Some("9"));
    }

    #[test]
    fn empty_body_decodes_to_null() {
        assert_eq!(decode_body("").unwrap(), Value::Null);
        assert_eq!(decode_body("  \n").unwrap(), Value::Null);
    }

    #[test]
    fn invalid_body_is_decode_error() {
        let err = decode_body("<html>502</html>").unwrap_err();
        assert!(matches!(err, SdkError::Decode { .. }));
    }

    #[test]
    fn typed_json_access() {
        #[derive(serde::Deserialize)]
        struct Named {
            name: String,
        }
        let resp = ApiResponse {
            envelope: Envelope::default(),
            body: serde_json::json!({"name": "kraken"}),
        };
        let named: Named = resp.json().unwrap();
        assert_eq!(named.name, "kraken");
    }

    #[test]
    fn method_names() {
        assert_eq!(HttpMethod::default(), HttpMethod::Get);
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
