//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with per-provider status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Configuration status for each provider.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub profile_provider: CheckStatus,
    pub link_provider: CheckStatus,
    pub scrape_provider: CheckStatus,
}

/// Individual component health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
