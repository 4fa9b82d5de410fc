//! DTOs for the scrape snapshot endpoints.

use serde::Deserialize;
use validator::Validate;

/// Request to scrape a profile page through the snapshot workflow.
#[derive(Debug, Deserialize, Validate)]
pub struct SnapshotRequest {
    /// Profile page to scrape (must be an absolute HTTP/HTTPS URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Query parameters for `GET /brightdata-snapshot`.
#[derive(Debug, Deserialize, Validate)]
pub struct SnapshotQuery {
    #[validate(length(min = 1, message = "Snapshot id must not be empty"))]
    pub snapshot_id: String,
}
