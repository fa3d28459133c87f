//! `users/{user}`, the token owner and their followed streams and videos.

use serde_json::Value;

use super::{segment, with_query};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::transport::Transport;

const URI_USER_AUTH: &str = "user";
const URI_STREAMS_FOLLOWED: &str = "streams/followed";
const URI_VIDEOS_FOLLOWED: &str = "videos/followed";

/// User lookups and the authenticated user's feeds.
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    transport: &'a Transport,
}

impl<'a> Users<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub fn user(&self, username: &str) -> Result<Value> {
        let path = format!("users/{}", segment(username));
        self.transport.request(&path, HttpMethod::Get, None)
    }

    /// The user owning the token in `query`.
    pub fn user_auth(&self, query: Option<&str>) -> Result<Value> {
        let path = with_query(URI_USER_AUTH, query);
        self.transport.request(&path, HttpMethod::Get, None)
    }

    pub fn followed_streams(&self, query: Option<&str>) -> Result<Value> {
        let path = with_query(URI_STREAMS_FOLLOWED, query);
        self.transport.request(&path, HttpMethod::Get, None)
    }

    pub fn followed_videos(&self, query: Option<&str>) -> Result<Value> {
        let path = with_query(URI_VIDEOS_FOLLOWED, query);
        self.transport.request(&path, HttpMethod::Get, None)
    }
}
