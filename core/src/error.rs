//! Error types for the Twitch SDK.
//!
//! # Design
//! Every failure the SDK can produce lands in `SdkError`, so callers match on
//! one type. Each variant maps to a numeric code via [`SdkError::code`].
//! Transport codes follow curl's numbering.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = SdkError> = std::result::Result<T, E>;

pub const CODE_CONFIG_VALIDATION: i32 = 1;
pub const CODE_MISSING_CONFIGURATION: i32 = 2;
pub const CODE_BAD_URL: i32 = 3;
pub const CODE_HOST_NOT_FOUND: i32 = 6;
pub const CODE_CONNECT_FAILED: i32 = 7;
pub const CODE_TIMEOUT: i32 = 28;
pub const CODE_TLS: i32 = 35;
pub const CODE_TOO_MANY_REDIRECTS: i32 = 47;
pub const CODE_RECV: i32 = 56;
pub const CODE_DECODE: i32 = 100;

/// Errors returned by `TwitchSdk`, resource clients and `Transport`.
#[derive(Debug, Error)]
pub enum SdkError {
    /// Credentials were supplied but are partial or contain empty fields.
    #[error("invalid Twitch API configuration: {0}")]
    ConfigValidation(String),

    /// An authenticated operation was called before credentials were set.
    #[error("cannot call authenticated functions without valid API configuration")]
    MissingConfiguration,

    /// The HTTP exchange itself failed (DNS, connect, TLS, timeout, I/O).
    #[error("transport error [{code}]: {message}")]
    Transport {
        message: String,
        code: i32,
        #[source]
        source: Option<ureq::Error>,
    },

    /// The response body was not valid JSON.
    #[error("response is not valid JSON: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl SdkError {
    /// Numeric code for this error.
    pub fn code(&self) -> i32 {
        match self {
            SdkError::ConfigValidation(_) => CODE_CONFIG_VALIDATION,
            SdkError::MissingConfiguration => CODE_MISSING_CONFIGURATION,
            SdkError::Transport { code, .. } => *code,
            SdkError::Decode { .. } => CODE_DECODE,
        }
    }

    pub(crate) fn transport(err: ureq::Error) -> Self {
        SdkError::Transport {
            message: err.to_string(),
            code: transport_code(&err),
            source: Some(err),
        }
    }

    pub(crate) fn decode(err: serde_json::Error) -> Self {
        SdkError::Decode {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

/// Map a ureq failure onto curl's error numbering.
fn transport_code(err: &ureq::Error) -> i32 {
    use std::io::ErrorKind;

    match err {
        ureq::Error::BadUri(_) => CODE_BAD_URL,
        ureq::Error::HostNotFound => CODE_HOST_NOT_FOUND,
        ureq::Error::ConnectionFailed => CODE_CONNECT_FAILED,
        ureq::Error::Timeout(_) => CODE_TIMEOUT,
        ureq::Error::Tls(_) | ureq::Error::Rustls(_) => CODE_TLS,
        ureq::Error::TooManyRedirects => CODE_TOO_MANY_REDIRECTS,
        ureq::Error::Io(io) if is_lookup_failure(io) => CODE_HOST_NOT_FOUND,
        ureq::Error::Io(io) => match io.kind() {
            ErrorKind::ConnectionRefused
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::AddrNotAvailable => CODE_CONNECT_FAILED,
            ErrorKind::TimedOut => CODE_TIMEOUT,
            // rustls reports handshake failures as `InvalidData`.
            ErrorKind::InvalidData => CODE_TLS,
            _ => CODE_RECV,
        },
        _ => CODE_RECV,
    }
}

/// Whether `io` came out of `ToSocketAddrs`, which has no dedicated
/// `ErrorKind`. Unix resolvers fail with a fixed message prefix, Windows
/// with a WSA error code.
fn is_lookup_failure(io: &std::io::Error) -> bool {
    const LOOKUP_PREFIX: &str = "failed to lookup address information";
    const WSAHOST_NOT_FOUND: i32 = 11001;
    const WSATRY_AGAIN: i32 = 11002;
    const WSANO_DATA: i32 = 11004;

    if cfg!(windows)
        && matches!(
            io.raw_os_error(),
            Some(WSAHOST_NOT_FOUND | WSATRY_AGAIN | WSANO_DATA)
        )
    {
        return true;
    }
    io.to_string().starts_with(LOOKUP_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(SdkError::ConfigValidation("x".into()).code(), 1);
        assert_eq!(SdkError::MissingConfiguration.code(), 2);
        let err = SdkError::Transport {
            message: "refused".into(),
            code: CODE_CONNECT_FAILED,
            source: None,
        };
        assert_eq!(err.code(), 7);
    }

    #[test]
    fn io_refused_maps_to_connect_failed() {
        let io = std::io::Error::from(std::io::ErrorKind::ConnectionRefused);
        let err = SdkError::transport(ureq::Error::Io(io));
        assert_eq!(err.code(), CODE_CONNECT_FAILED);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn resolver_failure_maps_to_host_not_found() {
        let io = std::io::Error::other(
            "failed to lookup address information: Name or service not known",
        );
        let err = SdkError::transport(ureq::Error::Io(io));
        assert_eq!(err.code(), CODE_HOST_NOT_FOUND);
        assert_eq!(SdkError::transport(ureq::Error::HostNotFound).code(), CODE_HOST_NOT_FOUND);
    }

    #[test]
    fn other_io_failures_map_to_recv() {
        let io = std::io::Error::other("something else broke");
        assert_eq!(SdkError::transport(ureq::Error::Io(io)).code(), CODE_RECV);
        let eof = std::io::Error::from(std::io::ErrorKind::UnexpectedEof);
        assert_eq!(SdkError::transport(ureq::Error::Io(eof)).code(), CODE_RECV);
    }

    #[test]
    fn tls_failures_map_to_tls() {
        let err = SdkError::transport(ureq::Error::Tls("Rustls invalid dns name error"));
        assert_eq!(err.code(), CODE_TLS);
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "corrupt message");
        assert_eq!(SdkError::transport(ureq::Error::Io(io)).code(), CODE_TLS);
    }

    #[test]
    fn timeout_maps_to_timeout() {
        let io = std::io::Error::from(std::io::ErrorKind::TimedOut);
        assert_eq!(SdkError::transport(ureq::Error::Io(io)).code(), CODE_TIMEOUT);
    }

    #[test]
    fn decode_error_keeps_serde_source() {
        let serde_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = SdkError::decode(serde_err);
        assert_eq!(err.code(), CODE_DECODE);
        assert!(err.to_string().starts_with("response is not valid JSON"));
    }

    #[test]
    fn missing_configuration_message() {
        assert_eq!(
            SdkError::MissingConfiguration.to_string(),
            "cannot call authenticated functions without valid API configuration"
        );
    }
}
