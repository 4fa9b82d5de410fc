mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use profile_gateway::routes::router;

#[tokio::test]
async fn test_health_with_credentials() {
    let (server, providers) = common::create_test_server().await;

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["profile_provider"]["status"], "ok");
    assert_eq!(json["checks"]["link_provider"]["status"], "ok");
    assert_eq!(json["checks"]["scrape_provider"]["status"], "ok");

    // Health never calls out.
    assert_eq!(common::CallLog::count(&providers.calls.profile), 0);
    assert_eq!(common::CallLog::count(&providers.calls.trigger), 0);
}

#[tokio::test]
async fn test_health_degraded_without_credentials() {
    let providers = common::FakeProviders::start().await;

    let mut config = providers.config(0);
    config.dub_token = None;
    config.brightdata_dataset_id = None;

    let server = TestServer::new(router(common::create_test_state(&config))).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["profile_provider"]["status"], "ok");
    assert_eq!(json["checks"]["link_provider"]["status"], "missing");
    assert_eq!(json["checks"]["scrape_provider"]["status"], "missing");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (server, _providers) = common::create_test_server().await;

    server
        .get("/does-not-exist")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
