//! `channel` and `channels/{channel}/*`: channel objects, editors, teams and
//! the stream key.

use serde_json::Value;

use super::{segment, with_query};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::transport::Transport;

const URI_CHANNEL_AUTH: &str = "channel";

/// Channel reads and edits.
#[derive(Debug, Clone, Copy)]
pub struct Channels<'a> {
    transport: &'a Transport,
}

impl<'a> Channels<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub fn channel(&self, channel: &str) -> Result<Value> {
        let path = format!("channels/{}", segment(channel));
        self.transport.request(&path, HttpMethod::Get, None)
    }

    /// The channel owning the token in `query`.
    pub fn channel_auth(&self, query: Option<&str>) -> Result<Value> {
        let path = with_query(URI_CHANNEL_AUTH, query);
        self.transport.request(&path, HttpMethod::Get, None)
    }

    /// PUT the form-encoded `data` onto the channel.
    pub fn update(&self, channel: &str, query: Option<&str>, data: Option<&str>) -> Result<Value> {
        let path = with_query(format!("channels/{}", segment(channel)), query);
        self.transport.request(&path, HttpMethod::Put, data)
    }

    pub fn reset_stream_key(&self, channel: &str, query: Option<&str>) -> Result<Value> {
        let path = with_query(format!("channels/{}/stream_key", segment(channel)), query);
        self.transport.request(&path, HttpMethod::Delete, None)
    }

    pub fn editors(&self, channel: &str, query: Option<&str>) -> Result<Value> {
        let path = with_query(format!("channels/{}/editors", segment(channel)), query);
        self.transport.request(&path, HttpMethod::Get, None)
    }

    pub fn teams(&self, channel: &str) -> Result<Value> {
        let path = format!("channels/{}/teams", segment(channel));
        self.transport.request(&path, HttpMethod::Get, None)
    }
}
