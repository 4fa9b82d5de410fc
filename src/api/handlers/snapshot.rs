//! Handlers for the scrape snapshot workflow.

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde_json::Value;
use validator::Validate;

use crate::api::dto::snapshot::{SnapshotQuery, SnapshotRequest};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::target_url::parse_target_url;

/// Scrapes a profile page: trigger, fixed wait, fetch.
///
/// # Endpoint
///
/// `POST /get-user-profile`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.instagram.com/natgeo/" }
/// ```
///
/// # Response
///
/// The snapshot payload exactly as the scrape provider returned it. The
/// request takes at least the configured snapshot delay (5 seconds by
/// default).
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or `url` is invalid.
/// Returns 500 if the trigger response carries no snapshot id.
/// Returns the provider's status for provider-side errors.
pub async fn get_user_profile_handler(
    State(state): State<AppState>,
    payload: Result<Json<SnapshotRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;
    let url = parse_target_url(&payload.url)?;

    let snapshot = state.snapshot_service.collect(&url).await?;

    Ok(Json(snapshot))
}

/// Fetches an existing snapshot by id without triggering a new job.
///
/// # Endpoint
///
/// `GET /brightdata-snapshot?snapshot_id=s_m1abc2def`
///
/// # Response
///
/// The snapshot payload exactly as the scrape provider returned it (which
/// may be a "not ready" status object if the job is still running).
///
/// # Errors
///
/// Returns 400 Bad Request if `snapshot_id` is missing or empty.
/// Returns the provider's status for provider-side errors.
pub async fn snapshot_handler(
    State(state): State<AppState>,
    query: Result<Query<SnapshotQuery>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(query) = query?;
    query.validate()?;

    let snapshot = state.snapshot_service.fetch(&query.snapshot_id).await?;

    Ok(Json(snapshot))
}
