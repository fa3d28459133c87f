use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Echo, REQUEST_COUNT_HEADER};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- echo ---

#[tokio::test]
async fn echo_reports_path_and_query() {
    let resp = app()
        .oneshot(get("/kraken/streams/summary?game=Chess&hls=1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[REQUEST_COUNT_HEADER], "1");
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "GET");
    assert_eq!(echo.path, "/kraken/streams/summary");
    assert_eq!(echo.query["game"], "Chess");
    assert_eq!(echo.query["hls"], "1");
    assert!(echo.body.is_empty());
}

#[tokio::test]
async fn echo_root() {
    let resp = app().oneshot(get("/kraken/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.path, "/kraken/");
    assert!(echo.query.is_empty());
}

#[tokio::test]
async fn echo_reports_headers_and_body() {
    let req = Request::builder()
        .method("PUT")
        .uri("/kraken/channels/foo?oauth_token=t")
        .header(http::header::ACCEPT, "application/vnd.twitchtv.v3+json")
        .header("Client-ID", "abc")
        .header(
            http::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body("channel%5Bstatus%5D=hi".to_string())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "PUT");
    assert_eq!(echo.headers["accept"], "application/vnd.twitchtv.v3+json");
    assert_eq!(echo.headers["client-id"], "abc");
    assert_eq!(echo.body, "channel%5Bstatus%5D=hi");
    assert_eq!(echo.query["oauth_token"], "t");
}

#[tokio::test]
async fn echo_accepts_delete() {
    let req = Request::builder()
        .method("DELETE")
        .uri("/kraken/users/a/blocks/b")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "DELETE");
    assert_eq!(echo.path, "/kraken/users/a/blocks/b");
}

// --- canned responses ---

#[tokio::test]
async fn broken_returns_html() {
    let resp = app().oneshot(get("/kraken/mock/broken")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body_bytes(resp).await;
    assert!(serde_json::from_slice::<serde_json::Value>(&bytes).is_err());
}

#[tokio::test]
async fn no_content_is_empty() {
    let req = Request::builder()
        .method("DELETE")
        .uri("/kraken/mock/no-content")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn not_found_has_json_error() {
    let resp = app().oneshot(get("/kraken/mock/not-found")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["status"], 404);
}

// --- team ---

#[tokio::test]
async fn team_lists_channels() {
    let resp = app()
        .oneshot(get("/api/team/staff/all_channels.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["team"], "staff");
    assert_eq!(body["channels"].as_array().unwrap().len(), 2);
    assert_eq!(body["channels"][0]["channel"]["name"], "staff_one");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let resp = app().oneshot(get("/api/other")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
