//! Provider trait for the link shortening service.

use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Creates short links and reports their analytics.
///
/// Payloads are opaque: the gateway passes them through without asserting a
/// schema. `Ok(None)` means the provider answered successfully but with an
/// empty or `null` body.
///
/// # Implementations
///
/// - [`crate::infrastructure::providers::DubClient`] - Dub REST API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkProvider: Send + Sync {
    /// Creates a short link pointing at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on any provider or transport failure.
    async fn create_link(&self, url: &str) -> Result<Option<Value>, AppError>;

    /// Retrieves click analytics for the link identified by `link_id`.
    ///
    /// The identifier is forwarded as-is; the provider validates it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on any provider or transport failure.
    async fn retrieve_analytics(&self, link_id: &str) -> Result<Option<Value>, AppError>;
}
