//! `streams/*`: single streams, filtered listings, featured and summary.

use serde_json::Value;

use super::{segment, with_query};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::transport::Transport;

const URI_STREAMS: &str = "streams";
const URI_STREAMS_FEATURED: &str = "streams/featured";
const URI_STREAMS_SUMMARY: &str = "streams/summary";

#[derive(Debug, Clone, Copy)]
pub struct Streams<'a> {
    transport: &'a Transport,
}

impl<'a> Streams<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// The live stream of `channel`; `stream` is `null` when offline.
    pub fn stream(&self, channel: &str) -> Result<Value> {
        let path = format!("streams/{}", segment(channel));
        self.transport.request(&path, HttpMethod::Get, None)
    }

    pub fn streams(&self, query: Option<&str>) -> Result<Value> {
        let path = with_query(URI_STREAMS, query);
        self.transport.request(&path, HttpMethod::Get, None)
    }

    pub fn featured(&self, query: Option<&str>) -> Result<Value> {
        let path = with_query(URI_STREAMS_FEATURED, query);
        self.transport.request(&path, HttpMethod::Get, None)
    }

    pub fn summary(&self, query: Option<&str>) -> Result<Value> {
        let path = with_query(URI_STREAMS_SUMMARY, query);
        self.transport.request(&path, HttpMethod::Get, None)
    }
}
