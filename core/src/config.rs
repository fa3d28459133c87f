//! SDK configuration.
//!
//! # Design
//! `SdkConfig` is the loose, deserializable input. It is validated once into
//! either `ConfigState::Unconfigured` (no credential fields at all) or
//! `ConfigState::Configured` (all three present and non-empty). A partial
//! set is rejected, so a half-configured SDK cannot exist.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, SdkError};

pub const KRAKEN_BASE_URL: &str = "https://api.twitch.tv/kraken/";
pub const TEAM_BASE_URL: &str = "http://api.twitch.tv/api/team/";
pub const DEFAULT_API_VERSION: u32 = 3;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_USER_AGENT: &str = concat!("twitch-sdk-rs/", env!("CARGO_PKG_VERSION"));

/// Application credentials required by OAuth-backed operations.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl Credentials {
    /// Validate and build credentials; every field must be non-empty.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Result<Self> {
        let creds = Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
        };
        for (name, value) in [
            ("client_id", &creds.client_id),
            ("client_secret", &creds.client_secret),
            ("redirect_uri", &creds.redirect_uri),
        ] {
            if value.is_empty() {
                return Err(SdkError::ConfigValidation(format!("{name} must not be empty")));
            }
        }
        Ok(creds)
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

/// Whether the SDK holds valid credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigState {
    #[default]
    Unconfigured,
    Configured(Credentials),
}

impl ConfigState {
    pub fn credentials(&self) -> Result<&Credentials> {
        match self {
            ConfigState::Configured(creds) => Ok(creds),
            ConfigState::Unconfigured => Err(SdkError::MissingConfiguration),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, ConfigState::Configured(_))
    }
}

/// HTTP behaviour of a `Transport`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TransportConfig {
    pub kraken_base_url: String,
    pub team_base_url: String,
    pub api_version: u32,
    pub user_agent: String,
    #[serde(with = "secs")]
    pub connect_timeout: Duration,
    #[serde(with = "secs")]
    pub timeout: Duration,
    pub verify_tls: bool,
    pub suppress_transport_errors: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            kraken_base_url: KRAKEN_BASE_URL.to_string(),
            team_base_url: TEAM_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
            verify_tls: true,
            suppress_transport_errors: false,
        }
    }
}

/// Loose SDK configuration as a host would deserialize it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
    pub transport: TransportConfig,
}

impl SdkConfig {
    pub fn with_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: Some(client_id.into()),
            client_secret: Some(client_secret.into()),
            redirect_uri: Some(redirect_uri.into()),
            transport: TransportConfig::default(),
        }
    }

    /// Resolve the credential fields into a `ConfigState`.
    pub fn state(&self) -> Result<ConfigState> {
        match (&self.client_id, &self.client_secret, &self.redirect_uri) {
            (None, None, None) => Ok(ConfigState::Unconfigured),
            (Some(id), Some(secret), Some(uri)) => {
                Credentials::new(id.as_str(), secret.as_str(), uri.as_str())
                    .map(ConfigState::Configured)
            }
            _ => Err(SdkError::ConfigValidation(
                "client_id, client_secret and redirect_uri must be set together".to_string(),
            )),
        }
    }
}

mod secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_unconfigured() {
        let state = SdkConfig::default().state().unwrap();
        assert_eq!(state, ConfigState::Unconfigured);
        assert!(matches!(state.credentials(), Err(SdkError::MissingConfiguration)));
    }

    #[test]
    fn full_config_is_configured() {
        let state = SdkConfig::with_credentials("a", "b", "c").state().unwrap();
        let creds = state.credentials().unwrap();
        assert_eq!(creds.client_id(), "a");
        assert_eq!(creds.client_secret(), "b");
        assert_eq!(creds.redirect_uri(), "c");
    }

    #[test]
    fn partial_config_is_rejected() {
        let config = SdkConfig {
            client_id: Some("a".into()),
            ..SdkConfig::default()
        };
        assert!(matches!(config.state(), Err(SdkError::ConfigValidation(_))));
    }

    #[test]
    fn empty_field_is_rejected() {
        let err = Credentials::new("a", "", "c").unwrap_err();
        assert!(matches!(err, SdkError::ConfigValidation(ref m) if m.contains("client_secret")));
    }

    #[test]
    fn debug_hides_secret() {
        let creds = Credentials::new("a", "hunter2", "c").unwrap();
        assert!(!format!("{creds:?}").contains("hunter2"));
    }

    #[test]
    fn transport_defaults() {
        let t = TransportConfig::default();
        assert_eq!(t.connect_timeout, Duration::from_secs(30));
        assert_eq!(t.timeout, Duration::from_secs(30));
        assert_eq!(t.api_version, 3);
        assert!(t.verify_tls);
        assert!(!t.suppress_transport_errors);
        assert_eq!(t.kraken_base_url, "https://api.twitch.tv/kraken/");
        assert_eq!(t.team_base_url, "http://api.twitch.tv/api/team/");
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: SdkConfig = serde_json::from_str(
            r#"{"client_id":"a","client_secret":"b","redirect_uri":"c","transport":{"timeout":5}}"#,
        )
        .unwrap();
        assert!(config.state().unwrap().is_configured());
        assert_eq!(config.transport.timeout, Duration::from_secs(5));
        assert_eq!(config.transport.connect_timeout, Duration::from_secs(30));
    }
}
