//! `chat/*`: chat endpoints, emoticons and badges.

use serde_json::Value;

use super::{segment, with_query};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::transport::Transport;

const URI_CHAT_EMOTICONS: &str = "chat/emoticons";
const URI_CHAT_EMOTICON_IMAGES: &str = "chat/emoticon_images";

#[derive(Debug, Clone, Copy)]
pub struct Chat<'a> {
    transport: &'a Transport,
}

impl<'a> Chat<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Links to the channel's chat endpoints.
    pub fn chat(&self, channel: &str) -> Result<Value> {
        let path = format!("chat/{}", segment(channel));
        self.transport.request(&path, HttpMethod::Get, None)
    }

    pub fn emoticons(&self) -> Result<Value> {
        self.transport.request(URI_CHAT_EMOTICONS, HttpMethod::Get, None)
    }

    pub fn emoticon_images(&self, query: Option<&str>) -> Result<Value> {
        let path = with_query(URI_CHAT_EMOTICON_IMAGES, query);
        self.transport.request(&path, HttpMethod::Get, None)
    }

    pub fn badges(&self, channel: &str) -> Result<Value> {
        let path = format!("chat/{}/badges", segment(channel));
        self.transport.request(&path, HttpMethod::Get, None)
    }
}
