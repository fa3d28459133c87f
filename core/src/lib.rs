//! Blocking client SDK for the Twitch Kraken (v3) REST API.
//!
//! # Overview
//! `TwitchSdk` is the entry point. It holds the application credentials and
//! one `Transport`, and exposes a method per API operation. Responses are
//! returned as `serde_json::Value`, exactly as Twitch sent them.
//!
//! ```no_run
//! use twitch_sdk::{SdkConfig, TwitchSdk};
//!
//! # fn main() -> twitch_sdk::Result<()> {
//! let sdk = TwitchSdk::new(SdkConfig::with_credentials("id", "secret", "https://app/cb"))?;
//! let stream = sdk.stream_get("some_channel")?;
//! println!("{}", stream["stream"]);
//! println!("{}", sdk.auth_login_url("user_read")?);
//! # Ok(())
//! # }
//! ```
//!
//! # Design
//! - Every call flows through `Transport`: request construction
//!   (`build_request`) is pure and separately testable; execution uses a
//!   shared `ureq::Agent`.
//! - Optional parameters go through `Query`, which drops empty values.
//! - Resource clients in `resources` borrow the transport and only map
//!   parameters onto URI templates.
//! - One error type, `SdkError`, with a numeric `code()`.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod resources;
pub mod transport;
pub mod types;

pub use client::TwitchSdk;
pub use config::{ConfigState, Credentials, SdkConfig, TransportConfig};
pub use error::{Result, SdkError};
pub use http::{parse_header_line, ApiResponse, Envelope, HttpMethod, HttpRequest};
pub use query::{build_query_string, join_list, Query, QueryValue};
pub use transport::{Endpoint, Transport};
pub use types::{
    AccessToken, ChannelFollowsOptions, ChannelUpdate, ChannelVideosOptions, Direction,
    FollowSort, Page, Period, StreamsFilter, TopVideosOptions, UserFollowsOptions,
};
