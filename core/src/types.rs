//! Typed inputs and the few typed outputs the SDK offers.
//!
//! # Design
//! Responses are passed through as `serde_json::Value`; only the token
//! exchange has a typed shape. Optional listing parameters are grouped into
//! `Default`-able structs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of exchanging an authorization code at `oauth2/token`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Vec<String>,
}

/// Sort direction accepted by listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering for a user's followed channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowSort {
    CreatedAt,
    LastBroadcast,
    Login,
}

impl FollowSort {
    pub fn as_str(self) -> &'static str {
        match self {
            FollowSort::CreatedAt => "created_at",
            FollowSort::LastBroadcast => "last_broadcast",
            FollowSort::Login => "login",
        }
    }
}

/// Time window for top videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    Month,
    All,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::All => "all",
        }
    }
}

/// Plain limit/offset paging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl Page {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }
}

/// Options for `TwitchSdk::user_follow_channels`.
#[derive(Debug, Clone, Default)]
pub struct UserFollowsOptions {
    pub page: Page,
    pub direction: Option<Direction>,
    pub sort_by: Option<FollowSort>,
}

/// Options for `TwitchSdk::channel_follows`.
#[derive(Debug, Clone, Default)]
pub struct ChannelFollowsOptions {
    pub page: Page,
    pub cursor: Option<String>,
    pub direction: Option<Direction>,
}

/// Filters for the `streams` listing.
#[derive(Debug, Clone, Default)]
pub struct StreamsFilter {
    pub game: Option<String>,
    pub channels: Vec<String>,
    pub page: Page,
    pub embeddable: Option<bool>,
    pub hls: Option<bool>,
}

/// Options for `TwitchSdk::videos_top`.
#[derive(Debug, Clone, Default)]
pub struct TopVideosOptions {
    pub page: Page,
    pub game: Option<String>,
    pub period: Option<Period>,
}

/// Options for `TwitchSdk::videos_by_channel`.
#[derive(Debug, Clone, Default)]
pub struct ChannelVideosOptions {
    pub page: Page,
    pub broadcasts: Option<bool>,
    pub hls: Option<bool>,
}

/// Fields to change on a channel. Unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ChannelUpdate {
    pub status: Option<String>,
    pub game: Option<String>,
    pub delay: Option<u32>,
}
