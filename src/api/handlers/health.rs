//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with provider checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All provider credentials configured
/// - **503 Service Unavailable**: One or more providers missing credentials
///
/// No outbound calls are made; the check only reports configuration.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "profile_provider": { "status": "ok", "message": "No credentials required" },
///     "link_provider": { "status": "ok", "message": "Token configured" },
///     "scrape_provider": { "status": "ok", "message": "API key and dataset configured" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let profile_check = CheckStatus {
        status: "ok".to_string(),
        message: Some("No credentials required".to_string()),
    };

    let link_check = check_credentials(
        state.credentials.link_provider,
        "Token configured",
        "DUB_TOKEN is not set",
    );

    let scrape_check = check_credentials(
        state.credentials.scrape_provider,
        "API key and dataset configured",
        "BRIGHTDATA_API_KEY or BRIGHTDATA_DATASET_ID is not set",
    );

    let all_healthy = link_check.status == "ok" && scrape_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            profile_provider: profile_check,
            link_provider: link_check,
            scrape_provider: scrape_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check_credentials(configured: bool, ok_message: &str, missing_message: &str) -> CheckStatus {
    if configured {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(ok_message.to_string()),
        }
    } else {
        CheckStatus {
            status: "missing".to_string(),
            message: Some(missing_message.to_string()),
        }
    }
}
