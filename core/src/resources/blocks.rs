//! `users/{user}/blocks`: a user's block list.

use serde_json::Value;

use super::{segment, with_query};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::transport::Transport;

#[derive(Debug, Clone, Copy)]
pub struct Blocks<'a> {
    transport: &'a Transport,
}

impl<'a> Blocks<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub fn list(&self, user: &str, query: Option<&str>) -> Result<Value> {
        let path = with_query(format!("users/{}/blocks", segment(user)), query);
        self.transport.request(&path, HttpMethod::Get, None)
    }

    pub fn block(&self, user: &str, target: &str, query: Option<&str>) -> Result<Value> {
        self.transport
            .request(&target_path(user, target, query), HttpMethod::Put, None)
    }

    pub fn unblock(&self, user: &str, target: &str, query: Option<&str>) -> Result<Value> {
        self.transport
            .request(&target_path(user, target, query), HttpMethod::Delete, None)
    }
}

fn target_path(user: &str, target: &str, query: Option<&str>) -> String {
    with_query(
        format!("users/{}/blocks/{}", segment(user), segment(target)),
        query,
    )
}
