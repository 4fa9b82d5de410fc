//! Handler for profile lookup endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::profile::{ProfileRequest, ProfileResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Looks up a social profile by username.
///
/// # Endpoint
///
/// `POST /profile`
///
/// # Request Body
///
/// ```json
/// { "username": "natgeo" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "username": "natgeo",
///   "full_name": "National Geographic",
///   "biography": "...",
///   "profile_pic_url": "https://...",
///   "is_private": false,
///   "followers_count": 283000000,
///   "followees_count": 160,
///   "media_count": 30500,
///   "user_id": 787132,
///   "is_verified": true
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or the username is empty.
/// Returns 404 Not Found if the profile does not exist.
/// Returns the provider's status (or 500) for any other provider failure.
pub async fn profile_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProfileRequest>, JsonRejection>,
) -> Result<Json<ProfileResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let profile = state.profile_service.get_profile(&payload.username).await?;

    Ok(Json(profile.into()))
}
