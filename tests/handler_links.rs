mod common;

use axum::http::StatusCode;
use std::sync::atomic::Ordering;

#[tokio::test]
async fn test_create_link_passes_provider_payload_through() {
    let (server, providers) = common::create_test_server().await;

    let response = server
        .post("/create-link")
        .add_query_param("url", "https://example.com/landing?ref=gw")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], "link_1JXYZ");
    assert_eq!(json["shortLink"], "https://dub.sh/abc123");
    assert_eq!(json["url"], "https://example.com/landing?ref=gw");

    assert_eq!(providers.calls.create_link.load(Ordering::SeqCst), 1);
    let sent = providers.calls.last_create_body.lock().unwrap().clone().unwrap();
    assert_eq!(sent["url"], "https://example.com/landing?ref=gw");
    assert_eq!(
        providers.calls.last_authorization.lock().unwrap().as_deref(),
        Some("Bearer dub_test_token")
    );
}

#[tokio::test]
async fn test_create_link_null_result_is_500() {
    let (server, _providers) = common::create_test_server().await;

    let response = server
        .post("/create-link")
        .add_query_param("url", "https://example.com/null-result")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "upstream_error");
    assert_eq!(json["detail"], "Failed to create link");
}

#[tokio::test]
async fn test_create_link_relays_provider_error() {
    let (server, _providers) = common::create_test_server().await;

    let response = server
        .post("/create-link")
        .add_query_param("url", "https://example.com/forbidden")
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(
        response.json::<serde_json::Value>()["detail"],
        "Not allowed to create links."
    );
}

#[tokio::test]
async fn test_create_link_rejects_relative_url() {
    let (server, providers) = common::create_test_server().await;

    let response = server
        .post("/create-link")
        .add_query_param("url", "/not/absolute")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["code"],
        "validation_error"
    );
    assert_eq!(providers.calls.create_link.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_create_link_rejects_non_http_scheme() {
    let (server, providers) = common::create_test_server().await;

    let response = server
        .post("/create-link")
        .add_query_param("url", "ftp://example.com/file.txt")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(providers.calls.create_link.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_create_link_missing_url() {
    let (server, providers) = common::create_test_server().await;

    let response = server.post("/create-link").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(
        !response.json::<serde_json::Value>()["detail"]
            .as_str()
            .unwrap()
            .is_empty()
    );
    assert_eq!(providers.calls.create_link.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_analytics_passes_provider_payload_through() {
    let (server, providers) = common::create_test_server().await;

    let response = server
        .get("/analytics")
        .add_query_param("link_id", "link_1JXYZ")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        serde_json::json!({ "clicks": 42, "leads": 3, "sales": 1, "saleAmount": 4900 })
    );
    assert_eq!(providers.calls.analytics.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_analytics_unknown_link_relays_provider_error() {
    let (server, _providers) = common::create_test_server().await;

    let response = server
        .get("/analytics")
        .add_query_param("link_id", "missing")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "upstream_error");
    assert_eq!(json["detail"], "Link not found.");
}

#[tokio::test]
async fn test_analytics_empty_result_is_500() {
    let (server, _providers) = common::create_test_server().await;

    let response = server
        .get("/analytics")
        .add_query_param("link_id", "empty")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>()["detail"],
        "Failed to retrieve analytics"
    );
}

#[tokio::test]
async fn test_analytics_missing_link_id() {
    let (server, providers) = common::create_test_server().await;

    let response = server.get("/analytics").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(providers.calls.analytics.load(Ordering::SeqCst), 0);
}
