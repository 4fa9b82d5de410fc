//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`   - Provider configuration check (public)
//! - everything else  - Gateway routes, see [`crate::api::routes::gateway_routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
///
/// Used directly by tests; the server wraps it with [`app_router`].
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::gateway_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with path normalization applied.
///
/// Normalization runs before routing, so `/profile/` reaches `/profile`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
