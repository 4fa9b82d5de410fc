//! Short link creation and analytics service.

use std::sync::Arc;

use crate::domain::providers::LinkProvider;
use crate::error::AppError;
use serde_json::{Value, json};
use url::Url;

/// Service for creating short links and reading their analytics.
///
/// Both operations pass the provider payload through untouched. The only
/// rule applied here is that an empty answer is a failure.
pub struct LinkService {
    provider: Arc<dyn LinkProvider>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(provider: Arc<dyn LinkProvider>) -> Self {
        Self { provider }
    }

    /// Creates a short link for an already validated absolute URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the provider fails or answers with
    /// an empty payload.
    pub async fn create_link(&self, url: &Url) -> Result<Value, AppError> {
        tracing::debug!(url = %url, "Creating short link");

        self.provider
            .create_link(url.as_str())
            .await?
            .ok_or_else(|| {
                tracing::warn!(url = %url, "Link provider returned an empty payload");
                AppError::upstream("Failed to create link", json!({ "url": url.as_str() }))
            })
    }

    /// Retrieves analytics for `link_id`.
    ///
    /// The identifier is not validated locally.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the provider fails or answers with
    /// an empty payload.
    pub async fn retrieve_analytics(&self, link_id: &str) -> Result<Value, AppError> {
        tracing::debug!(link_id = %link_id, "Retrieving link analytics");

        self.provider
            .retrieve_analytics(link_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(link_id = %link_id, "Link provider returned empty analytics");
                AppError::upstream(
                    "Failed to retrieve analytics",
                    json!({ "link_id": link_id }),
                )
            })
    }
}
