#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use profile_gateway::config::Config;
use profile_gateway::routes::router;
use profile_gateway::state::AppState;

/// Snapshot id handed out by the fake trigger endpoint.
pub const SNAPSHOT_ID: &str = "s_test123";

/// Id handed out as a JSON number for URLs containing `numeric-id`.
pub const NUMERIC_SNAPSHOT_ID: u64 = 12345;

/// Calls received by the fake providers.
#[derive(Default)]
pub struct CallLog {
    pub profile: AtomicUsize,
    pub create_link: AtomicUsize,
    pub analytics: AtomicUsize,
    pub trigger: AtomicUsize,
    pub snapshot: AtomicUsize,
    pub last_create_body: Mutex<Option<Value>>,
    pub last_trigger_body: Mutex<Option<Value>>,
    pub last_trigger_query: Mutex<HashMap<String, String>>,
    pub last_snapshot_query: Mutex<HashMap<String, String>>,
    pub last_snapshot_id: Mutex<Option<String>>,
    pub last_authorization: Mutex<Option<String>>,
}

impl CallLog {
    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

/// In-process fake of the profile, link and scrape providers.
///
/// Behaviour is keyed on the input so each test can pick a scenario:
///
/// - profile: `natgeo` ok, `ghost` 404, `vanished` null user, `broken` 500,
///   `garbled` invalid JSON
/// - create link: URL containing `null-result` → `null`, `forbidden` → 403
/// - analytics: `missing` → 404, `empty` → empty body
/// - trigger: URL containing `no-id` → no snapshot id, `numeric-id` → numeric
///   snapshot id, `denied` → 401
/// - snapshot: `s_test123` and `12345` ok, `s_running` 202 not ready,
///   `s_empty` empty 200 body, `s_null` explicit `null`, `s_missing` 404
pub struct FakeProviders {
    pub base_url: String,
    pub calls: Arc<CallLog>,
}

impl FakeProviders {
    pub async fn start() -> Self {
        let calls = Arc::new(CallLog::default());

        let app = Router::new()
            .route("/instagram/api/v1/users/web_profile_info/", get(fake_profile))
            .route("/dub/links", post(fake_create_link))
            .route("/dub/analytics", get(fake_analytics))
            .route("/brightdata/datasets/v3/trigger", post(fake_trigger))
            .route("/brightdata/datasets/v3/snapshot/{id}", get(fake_snapshot))
            .with_state(calls.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            calls,
        }
    }

    pub fn config(&self, snapshot_delay_secs: u64) -> Config {
        Config {
            listen_addr: "127.0.0.1:0".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            dub_token: Some("dub_test_token".to_string()),
            dub_api_url: format!("{}/dub", self.base_url),
            brightdata_api_key: Some("bd_test_key".to_string()),
            brightdata_dataset_id: Some("gd_test_dataset".to_string()),
            brightdata_api_url: format!("{}/brightdata", self.base_url),
            instagram_api_url: format!("{}/instagram", self.base_url),
            snapshot_delay_secs,
            upstream_timeout_secs: Some(10),
        }
    }
}

pub fn create_test_state(config: &Config) -> AppState {
    AppState::from_config(config).unwrap()
}

/// Starts the fake providers and a gateway pointed at them (no snapshot delay).
pub async fn create_test_server() -> (TestServer, FakeProviders) {
    create_test_server_with_delay(0).await
}

pub async fn create_test_server_with_delay(snapshot_delay_secs: u64) -> (TestServer, FakeProviders) {
    let providers = FakeProviders::start().await;
    let state = create_test_state(&providers.config(snapshot_delay_secs));
    let server = TestServer::new(router(state)).unwrap();
    (server, providers)
}

fn json_response(status: StatusCode, body: impl Into<String>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body.into(),
    )
        .into_response()
}

fn record_authorization(calls: &CallLog, headers: &HeaderMap) {
    *calls.last_authorization.lock().unwrap() = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
}

async fn fake_profile(
    State(calls): State<Arc<CallLog>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    calls.profile.fetch_add(1, Ordering::SeqCst);

    match params.get("username").map(String::as_str) {
        Some("natgeo") => json_response(
            StatusCode::OK,
            json!({
                "data": {
                    "user": {
                        "id": "787132",
                        "username": "natgeo",
                        "full_name": "National Geographic",
                        "biography": "Experience the world through the eyes of our photographers.",
                        "profile_pic_url": "https://cdn.example.com/natgeo_s.jpg",
                        "profile_pic_url_hd": "https://cdn.example.com/natgeo_hd.jpg",
                        "is_private": false,
                        "is_verified": true,
                        "edge_followed_by": { "count": 283000000 },
                        "edge_follow": { "count": 160 },
                        "edge_owner_to_timeline_media": { "count": 30500 }
                    }
                },
                "status": "ok"
            })
            .to_string(),
        ),
        Some("vanished") => json_response(
            StatusCode::OK,
            json!({ "data": { "user": null }, "status": "ok" }).to_string(),
        ),
        Some("broken") => json_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
        Some("garbled") => json_response(StatusCode::OK, "<html>not json</html>"),
        _ => json_response(StatusCode::NOT_FOUND, ""),
    }
}

async fn fake_create_link(
    State(calls): State<Arc<CallLog>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    calls.create_link.fetch_add(1, Ordering::SeqCst);
    record_authorization(&calls, &headers);
    *calls.last_create_body.lock().unwrap() = Some(body.clone());

    let url = body["url"].as_str().unwrap_or_default().to_string();

    if url.contains("null-result") {
        json_response(StatusCode::OK, "null")
    } else if url.contains("forbidden") {
        json_response(
            StatusCode::FORBIDDEN,
            json!({ "error": { "code": "forbidden", "message": "Not allowed to create links." } })
                .to_string(),
        )
    } else {
        json_response(
            StatusCode::OK,
            json!({
                "id": "link_1JXYZ",
                "domain": "dub.sh",
                "key": "abc123",
                "url": url,
                "shortLink": "https://dub.sh/abc123",
                "clicks": 0
            })
            .to_string(),
        )
    }
}

async fn fake_analytics(
    State(calls): State<Arc<CallLog>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    calls.analytics.fetch_add(1, Ordering::SeqCst);
    record_authorization(&calls, &headers);

    match params.get("linkId").map(String::as_str) {
        Some("missing") => json_response(
            StatusCode::NOT_FOUND,
            json!({ "error": { "code": "not_found", "message": "Link not found." } }).to_string(),
        ),
        Some("empty") => json_response(StatusCode::OK, ""),
        Some(_) => json_response(
            StatusCode::OK,
            json!({ "clicks": 42, "leads": 3, "sales": 1, "saleAmount": 4900 }).to_string(),
        ),
        None => json_response(
            StatusCode::BAD_REQUEST,
            json!({ "error": { "code": "bad_request", "message": "linkId is required" } })
                .to_string(),
        ),
    }
}

async fn fake_trigger(
    State(calls): State<Arc<CallLog>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    calls.trigger.fetch_add(1, Ordering::SeqCst);
    record_authorization(&calls, &headers);
    *calls.last_trigger_query.lock().unwrap() = params;
    *calls.last_trigger_body.lock().unwrap() = Some(body.clone());

    let url = body[0]["url"].as_str().unwrap_or_default();

    if url.contains("no-id") {
        json_response(StatusCode::OK, json!({ "message": "queued" }).to_string())
    } else if url.contains("numeric-id") {
        json_response(
            StatusCode::OK,
            json!({ "snapshot_id": NUMERIC_SNAPSHOT_ID }).to_string(),
        )
    } else if url.contains("denied") {
        json_response(StatusCode::UNAUTHORIZED, "Unauthorized")
    } else {
        json_response(
            StatusCode::OK,
            json!({ "snapshot_id": SNAPSHOT_ID }).to_string(),
        )
    }
}

async fn fake_snapshot(
    State(calls): State<Arc<CallLog>>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    calls.snapshot.fetch_add(1, Ordering::SeqCst);
    *calls.last_snapshot_id.lock().unwrap() = Some(id.clone());
    *calls.last_snapshot_query.lock().unwrap() = params;

    match id.as_str() {
        SNAPSHOT_ID | "12345" => json_response(StatusCode::OK, snapshot_payload().to_string()),
        "s_empty" => json_response(StatusCode::OK, ""),
        "s_null" => json_response(StatusCode::OK, "null"),
        "s_running" => json_response(
            StatusCode::ACCEPTED,
            json!({ "status": "running", "message": "Snapshot is not ready yet, try again in 10s" })
                .to_string(),
        ),
        _ => json_response(
            StatusCode::NOT_FOUND,
            json!({ "error": "Snapshot does not exist" }).to_string(),
        ),
    }
}

/// Body served for [`SNAPSHOT_ID`].
pub fn snapshot_payload() -> Value {
    json!([
        {
            "account": "natgeo",
            "followers": 283000000,
            "posts_count": 30500,
            "is_verified": true,
            "biography": "Experience the world through the eyes of our photographers.",
            "posts": [
                { "id": "C1", "likes": 120034, "comments": 512 },
                { "id": "C2", "likes": 98211, "comments": 377 }
            ]
        }
    ])
}
