//! Channel subscribers and a user's subscriptions.

use serde_json::Value;

use super::{segment, with_query};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::transport::Transport;

/// Subscription lookups; all of them need an OAuth token in the query.
#[derive(Debug, Clone, Copy)]
pub struct Subscriptions<'a> {
    transport: &'a Transport,
}

impl<'a> Subscriptions<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub fn channel_subscriptions(&self, channel: &str, query: Option<&str>) -> Result<Value> {
        let path = with_query(format!("channels/{}/subscriptions", segment(channel)), query);
        self.transport.request(&path, HttpMethod::Get, None)
    }

    /// Subscription of `user` to `channel`, seen from the channel side.
    pub fn channel_subscriber(&self, channel: &str, user: &str, query: Option<&str>) -> Result<Value> {
        let path = with_query(
            format!("channels/{}/subscriptions/{}", segment(channel), segment(user)),
            query,
        );
        self.transport.request(&path, HttpMethod::Get, None)
    }

    /// Subscription of `user` to `channel`, seen from the user side.
    pub fn user_subscription(&self, user: &str, channel: &str, query: Option<&str>) -> Result<Value> {
        let path = with_query(
            format!("users/{}/subscriptions/{}", segment(user), segment(channel)),
            query,
        );
        self.transport.request(&path, HttpMethod::Get, None)
    }
}
