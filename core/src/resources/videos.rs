//! `videos/*` and a channel's videos.

use serde_json::Value;

use super::{segment, with_query};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::transport::Transport;

const URI_VIDEOS_TOP: &str = "videos/top";

#[derive(Debug, Clone, Copy)]
pub struct Videos<'a> {
    transport: &'a Transport,
}

impl<'a> Videos<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub fn video(&self, id: &str) -> Result<Value> {
        let path = format!("videos/{}", segment(id));
        self.transport.request(&path, HttpMethod::Get, None)
    }

    pub fn top(&self, query: Option<&str>) -> Result<Value> {
        let path = with_query(URI_VIDEOS_TOP, query);
        self.transport.request(&path, HttpMethod::Get, None)
    }

    pub fn channel_videos(&self, channel: &str, query: Option<&str>) -> Result<Value> {
        let path = with_query(format!("channels/{}/videos", segment(channel)), query);
        self.transport.request(&path, HttpMethod::Get, None)
    }
}
