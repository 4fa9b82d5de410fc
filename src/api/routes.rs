//! API route configuration.
//!
//! Paths are kept flat at the root; each route dispatches to exactly one
//! application service.

use crate::api::handlers::{
    analytics_handler, create_link_handler, get_user_profile_handler, profile_handler,
    snapshot_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All gateway routes.
///
/// # Endpoints
///
/// - `POST /profile`              - Profile summary by username
/// - `POST /create-link`          - Create a short link (`?url=`)
/// - `GET  /analytics`            - Link analytics (`?link_id=`)
/// - `POST /get-user-profile`     - Trigger a scrape job, wait, fetch its snapshot
/// - `GET  /brightdata-snapshot`  - Fetch an existing snapshot (`?snapshot_id=`)
pub fn gateway_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", post(profile_handler))
        .route("/create-link", post(create_link_handler))
        .route("/analytics", get(analytics_handler))
        .route("/get-user-profile", post(get_user_profile_handler))
        .route("/brightdata-snapshot", get(snapshot_handler))
}
