//! Teams, including the legacy `all_channels` listing on the team endpoint.

use serde_json::Value;

use super::{segment, with_query};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::transport::Transport;

const URI_TEAMS: &str = "teams";

/// Teams on Kraken plus the legacy member listing.
#[derive(Debug, Clone, Copy)]
pub struct Teams<'a> {
    transport: &'a Transport,
}

impl<'a> Teams<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub fn team(&self, team: &str) -> Result<Value> {
        let path = format!("teams/{}", segment(team));
        self.transport.request(&path, HttpMethod::Get, None)
    }

    pub fn teams(&self, query: Option<&str>) -> Result<Value> {
        let path = with_query(URI_TEAMS, query);
        self.transport.request(&path, HttpMethod::Get, None)
    }

    /// Every member channel, served by the legacy team endpoint.
    pub fn all_channels(&self, team: &str) -> Result<Value> {
        let path = format!("{}/all_channels", segment(team));
        self.transport.team_request(&path)
    }
}
