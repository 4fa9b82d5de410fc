//! DTOs for the profile lookup endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Profile;

/// Request to look up a profile by username.
#[derive(Debug, Deserialize, Validate)]
pub struct ProfileRequest {
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: String,
}

/// Profile summary returned to clients.
///
/// Field names are part of the public contract.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub full_name: String,
    pub biography: String,
    pub profile_pic_url: String,
    pub is_private: bool,
    pub followers_count: u64,
    pub followees_count: u64,
    pub media_count: u64,
    pub user_id: u64,
    pub is_verified: bool,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            username: profile.username,
            full_name: profile.full_name,
            biography: profile.biography,
            profile_pic_url: profile.profile_pic_url,
            is_private: profile.is_private,
            followers_count: profile.followers,
            followees_count: profile.followees,
            media_count: profile.media_count,
            user_id: profile.user_id,
            is_verified: profile.is_verified,
        }
    }
}
