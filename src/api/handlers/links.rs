//! Handlers for short link creation and link analytics.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::Value;
use validator::Validate;

use crate::api::dto::link::{AnalyticsQuery, CreateLinkQuery};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::target_url::parse_target_url;

/// Creates a short link at the link provider.
///
/// # Endpoint
///
/// `POST /create-link?url=https://example.com/page`
///
/// # Response
///
/// The provider's created-link object, unmodified.
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing or not an absolute HTTP(S) URL.
/// Returns 500 if the provider answers with an empty payload.
/// Returns the provider's status for provider-side errors.
pub async fn create_link_handler(
    State(state): State<AppState>,
    query: Result<Query<CreateLinkQuery>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(query) = query?;
    query.validate()?;
    let url = parse_target_url(&query.url)?;

    let link = state.link_service.create_link(&url).await?;

    Ok(Json(link))
}

/// Retrieves analytics for a short link.
///
/// # Endpoint
///
/// `GET /analytics?link_id=clux0rgak00011...`
///
/// # Response
///
/// The provider's analytics object, unmodified.
///
/// # Errors
///
/// Returns 400 Bad Request if `link_id` is missing.
/// Returns 500 if the provider answers with an empty payload.
/// Returns the provider's status for provider-side errors (e.g. unknown link).
pub async fn analytics_handler(
    State(state): State<AppState>,
    query: Result<Query<AnalyticsQuery>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(query) = query?;

    let analytics = state.link_service.retrieve_analytics(&query.link_id).await?;

    Ok(Json(analytics))
}
