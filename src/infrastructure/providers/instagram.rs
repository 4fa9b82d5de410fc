//! Instagram web API client for profile lookups.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use super::http::{endpoint, read_payload, transport_error};
use crate::domain::entities::Profile;
use crate::domain::providers::ProfileProvider;
use crate::error::AppError;

const PROVIDER: &str = "instagram";

/// Application id the Instagram web client sends with profile requests.
const IG_APP_ID: &str = "936619743392459";

/// `web_profile_info` response envelope.
#[derive(Debug, Deserialize)]
struct WebProfileInfo {
    data: Option<WebProfileData>,
}

#[derive(Debug, Deserialize)]
struct WebProfileData {
    user: Option<IgUser>,
}

/// User record as returned by the web API.
///
/// `full_name` and `biography` come back as `null` on sparse profiles.
#[derive(Debug, Deserialize)]
struct IgUser {
    id: String,
    username: String,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    biography: Option<String>,
    #[serde(default)]
    profile_pic_url: Option<String>,
    #[serde(default)]
    profile_pic_url_hd: Option<String>,
    #[serde(default)]
    is_private: bool,
    #[serde(default)]
    is_verified: bool,
    edge_followed_by: EdgeCount,
    edge_follow: EdgeCount,
    edge_owner_to_timeline_media: EdgeCount,
}

#[derive(Debug, Deserialize)]
struct EdgeCount {
    count: u64,
}

impl TryFrom<IgUser> for Profile {
    type Error = AppError;

    fn try_from(user: IgUser) -> Result<Self, Self::Error> {
        let user_id = user.id.parse::<u64>().map_err(|_| {
            AppError::upstream(
                "Malformed user id from profile provider",
                json!({ "provider": PROVIDER, "user_id": user.id }),
            )
        })?;

        Ok(Profile {
            username: user.username,
            full_name: user.full_name.unwrap_or_default(),
            biography: user.biography.unwrap_or_default(),
            profile_pic_url: user
                .profile_pic_url_hd
                .or(user.profile_pic_url)
                .unwrap_or_default(),
            is_private: user.is_private,
            is_verified: user.is_verified,
            followers: user.edge_followed_by.count,
            followees: user.edge_follow.count,
            media_count: user.edge_owner_to_timeline_media.count,
            user_id,
        })
    }
}

/// Profile provider backed by Instagram's `web_profile_info` endpoint.
pub struct InstagramClient {
    http: reqwest::Client,
    base_url: Url,
}

impl InstagramClient {
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }
}

#[async_trait]
impl ProfileProvider for InstagramClient {
    async fn fetch_profile(&self, username: &str) -> Result<Profile, AppError> {
        let mut url = endpoint(
            &self.base_url,
            &["api", "v1", "users", "web_profile_info", ""],
        )?;
        url.query_pairs_mut().append_pair("username", username);

        tracing::debug!(username = %username, url = %url, "Querying profile provider");

        let response = self
            .http
            .get(url)
            .header("x-ig-app-id", IG_APP_ID)
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(profile_not_found(username));
        }

        let payload = read_payload(PROVIDER, response).await?.ok_or_else(|| {
            AppError::upstream(
                "Empty response from profile provider",
                json!({ "provider": PROVIDER }),
            )
        })?;

        let info: WebProfileInfo = serde_json::from_value(payload).map_err(|e| {
            AppError::upstream(
                format!("Unexpected profile payload: {e}"),
                json!({ "provider": PROVIDER }),
            )
        })?;

        match info.data.and_then(|d| d.user) {
            Some(user) => Profile::try_from(user),
            None => Err(profile_not_found(username)),
        }
    }
}

fn profile_not_found(username: &str) -> AppError {
    AppError::not_found("Profile not found", json!({ "username": username }))
}
