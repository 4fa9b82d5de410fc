//! Provider trait for social profile lookups.

use crate::domain::entities::Profile;
use crate::error::AppError;
use async_trait::async_trait;

/// Looks up public profile data by username.
///
/// # Implementations
///
/// - [`crate::infrastructure::providers::InstagramClient`] - Instagram web API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Fetches the profile for `username`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the provider reports that the
    /// profile does not exist.
    ///
    /// Returns [`AppError::Upstream`] for every other failure.
    async fn fetch_profile(&self, username: &str) -> Result<Profile, AppError>;
}
