//! Profile lookup service.

use std::sync::Arc;

use crate::domain::entities::Profile;
use crate::domain::providers::ProfileProvider;
use crate::error::AppError;
use serde_json::json;

/// Service for looking up social profiles by username.
///
/// One provider call per request. Nothing is cached and nothing is retried.
pub struct ProfileService {
    provider: Arc<dyn ProfileProvider>,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(provider: Arc<dyn ProfileProvider>) -> Self {
        Self { provider }
    }

    /// Retrieves the profile for `username`.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the username is blank.
    ///
    /// Returns [`AppError::NotFound`] if the profile does not exist.
    ///
    /// Returns [`AppError::Upstream`] for any other provider failure.
    pub async fn get_profile(&self, username: &str) -> Result<Profile, AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::bad_request(
                "Username must not be empty",
                json!({ "field": "username" }),
            ));
        }

        match self.provider.fetch_profile(username).await {
            Ok(profile) => Ok(profile),
            Err(err) => {
                tracing::warn!(username = %username, error = %err, "Profile lookup failed");
                Err(err)
            }
        }
    }
}
