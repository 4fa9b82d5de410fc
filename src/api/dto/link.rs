//! DTOs for the short link and analytics endpoints.

use serde::Deserialize;
use validator::Validate;

/// Query parameters for `POST /create-link`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkQuery {
    /// The URL to be shortened (must be an absolute HTTP/HTTPS URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Query parameters for `GET /analytics`.
///
/// The identifier is not validated; the provider decides whether it exists.
#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    pub link_id: String,
}
