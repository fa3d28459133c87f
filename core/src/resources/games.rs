//! `games/top`.

use serde_json::Value;

use super::with_query;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::transport::Transport;

const URI_GAMES_TOP: &str = "games/top";

#[derive(Debug, Clone, Copy)]
pub struct Games<'a> {
    transport: &'a Transport,
}

impl<'a> Games<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Games sorted by current viewers.
    pub fn top(&self, query: Option<&str>) -> Result<Value> {
        let path = with_query(URI_GAMES_TOP, query);
        self.transport.request(&path, HttpMethod::Get, None)
    }
}
