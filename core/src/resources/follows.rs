//! Follow listings and the follow relationship between a user and a channel.

use serde_json::Value;

use super::{segment, with_query};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::transport::Transport;

/// Follow relationships between users and channels.
#[derive(Debug, Clone, Copy)]
pub struct Follows<'a> {
    transport: &'a Transport,
}

impl<'a> Follows<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Users following `channel`.
    pub fn channel_follows(&self, channel: &str, query: Option<&str>) -> Result<Value> {
        let path = with_query(format!("channels/{}/follows", segment(channel)), query);
        self.transport.request(&path, HttpMethod::Get, None)
    }

    /// Channels `user` follows.
    pub fn user_follows(&self, user: &str, query: Option<&str>) -> Result<Value> {
        let path = with_query(format!("users/{}/follows/channels", segment(user)), query);
        self.transport.request(&path, HttpMethod::Get, None)
    }

    /// The follow object, or a 404 body when `user` does not follow `channel`.
    pub fn relationship(&self, user: &str, channel: &str) -> Result<Value> {
        self.transport
            .request(&relation_path(user, channel, None), HttpMethod::Get, None)
    }

    pub fn follow(&self, user: &str, channel: &str, query: Option<&str>) -> Result<Value> {
        self.transport
            .request(&relation_path(user, channel, query), HttpMethod::Put, None)
    }

    pub fn unfollow(&self, user: &str, channel: &str, query: Option<&str>) -> Result<Value> {
        self.transport
            .request(&relation_path(user, channel, query), HttpMethod::Delete, None)
    }
}

fn relation_path(user: &str, channel: &str, query: Option<&str>) -> String {
    with_query(
        format!("users/{}/follows/channels/{}", segment(user), segment(channel)),
        query,
    )
}
