//! Provider trait for asynchronous scrape jobs.

use crate::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Provider answer to a trigger request.
///
/// `snapshot_id` is optional on the wire; the workflow decides what a
/// missing id means. Numeric ids are accepted and kept in decimal form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TriggerReceipt {
    #[serde(default, deserialize_with = "snapshot_id_from_json")]
    pub snapshot_id: Option<String>,
}

fn snapshot_id_from_json<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(id)) => Some(id),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    })
}

/// Triggers scrape jobs and fetches their result snapshots.
///
/// # Implementations
///
/// - [`crate::infrastructure::providers::BrightDataClient`] - Bright Data datasets API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScrapeProvider: Send + Sync {
    /// Starts a scrape job for a single-element batch containing `url`.
    ///
    /// Every call starts a new, unrelated job.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on any provider or transport failure.
    async fn trigger(&self, url: &str) -> Result<TriggerReceipt, AppError>;

    /// Fetches the snapshot `snapshot_id` in JSON format.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on any provider or transport failure.
    async fn fetch_snapshot(&self, snapshot_id: &str) -> Result<Value, AppError>;
}
