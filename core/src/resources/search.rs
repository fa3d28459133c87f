//! `search/*` for channels, streams and games.

use serde_json::Value;

use super::with_query;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::transport::Transport;

const URI_SEARCH_CHANNELS: &str = "search/channels";
const URI_SEARCH_STREAMS: &str = "search/streams";
const URI_SEARCH_GAMES: &str = "search/games";

#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    transport: &'a Transport,
}

impl<'a> Search<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub fn channels(&self, query: Option<&str>) -> Result<Value> {
        self.get(URI_SEARCH_CHANNELS, query)
    }

    pub fn streams(&self, query: Option<&str>) -> Result<Value> {
        self.get(URI_SEARCH_STREAMS, query)
    }

    pub fn games(&self, query: Option<&str>) -> Result<Value> {
        self.get(URI_SEARCH_GAMES, query)
    }

    fn get(&self, uri: &str, query: Option<&str>) -> Result<Value> {
        self.transport
            .request(&with_query(uri, query), HttpMethod::Get, None)
    }
}
