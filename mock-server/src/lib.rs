//! Stand-in for the two Twitch endpoints used by the SDK's tests.
//!
//! Every Kraken route echoes the request back as JSON (`Echo`) so tests can
//! assert on method, path, query, headers and body. A few fixed paths under
//! `/kraken/mock/` produce the awkward responses a client has to survive.

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

pub const REQUEST_COUNT_HEADER: &str = "x-mock-request-count";

/// What the server saw.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Echo {
    pub method: String,
    pub path: String,
    pub query: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

pub type Counter = Arc<AtomicU64>;

pub fn app() -> Router {
    let counter: Counter = Arc::new(AtomicU64::new(0));
    Router::new()
        .route("/kraken/mock/broken", get(broken_json))
        .route("/kraken/mock/no-content", any(no_content))
        .route("/kraken/mock/not-found", get(not_found))
        .route("/kraken/", any(echo))
        .route("/kraken/{*path}", any(echo))
        .route("/api/team/{team}/all_channels.json", get(team_channels))
        .with_state(counter)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(
    State(counter): State<Counter>,
    method: Method,
    uri: Uri,
    Query(query): Query<BTreeMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let count = counter.fetch_add(1, Ordering::SeqCst) + 1;
    tracing::info!(%method, path = uri.path(), count, "echoing request");

    let headers = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let echo = Echo {
        method: method.to_string(),
        path: uri.path().to_string(),
        query,
        headers,
        body,
    };
    ([(REQUEST_COUNT_HEADER, count.to_string())], Json(echo)).into_response()
}

async fn broken_json() -> Response {
    (
        [(header::CONTENT_TYPE, "text/html")],
        "<html>upstream exploded</html>",
    )
        .into_response()
}

async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "Not Found", "status": 404, "message": "Channel does not exist"})),
    )
}

async fn team_channels(Path(team): Path<String>) -> Json<serde_json::Value> {
    Json(json!({
        "team": team,
        "channels": [
            {"channel": {"name": format!("{team}_one"), "status": "live"}},
            {"channel": {"name": format!("{team}_two"), "status": "offline"}},
        ],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_serializes_to_json() {
        let echo = Echo {
            method: "GET".to_string(),
            path: "/kraken/users/foo".to_string(),
            query: BTreeMap::from([("limit".to_string(), "5".to_string())]),
            headers: BTreeMap::new(),
            body: String::new(),
        };
        let value = serde_json::to_value(&echo).unwrap();
        assert_eq!(value["method"], "GET");
        assert_eq!(value["query"]["limit"], "5");
        assert_eq!(value["body"], "");
    }

    #[test]
    fn echo_roundtrips_through_json() {
        let echo = Echo {
            method: "PUT".to_string(),
            path: "/kraken/channels/foo".to_string(),
            query: BTreeMap::new(),
            headers: BTreeMap::from([("client-id".to_string(), "abc".to_string())]),
            body: "channel%5Bstatus%5D=hi".to_string(),
        };
        let json = serde_json::to_string(&echo).unwrap();
        let back: Echo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, echo);
    }
}
