//! Scrape snapshot workflow.
//!
//! The one multi-step flow in the gateway:
//!
//! 1. **Trigger** - start a scrape job for a single URL; the provider must
//!    answer with a `snapshot_id`
//! 2. **Wait** - sleep for a fixed delay (5 seconds by default); job status is
//!    not checked while waiting
//! 3. **Fetch** - download the snapshot as JSON and return it verbatim
//!
//! The fetch step is also exposed on its own for clients that already hold a
//! snapshot id.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{JobStage, SnapshotJob};
use crate::domain::providers::ScrapeProvider;
use crate::error::AppError;
use serde_json::{Value, json};
use url::Url;

/// Delay between triggering a job and fetching its snapshot.
pub const DEFAULT_SNAPSHOT_DELAY: Duration = Duration::from_secs(5);

/// Service driving scrape jobs on the scrape provider.
///
/// Stateless between calls: every [`SnapshotService::collect`] starts a new,
/// unrelated job, and a failed invocation is never resumed.
pub struct SnapshotService {
    provider: Arc<dyn ScrapeProvider>,
    delay: Duration,
}

impl SnapshotService {
    /// Creates a new snapshot service waiting `delay` between trigger and fetch.
    pub fn new(provider: Arc<dyn ScrapeProvider>, delay: Duration) -> Self {
        Self { provider, delay }
    }

    /// Runs the full trigger → wait → fetch workflow for `url`.
    ///
    /// Exactly one trigger call and, if it yields a snapshot id, exactly one
    /// fetch call are made.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if:
    /// - the trigger call fails (provider status relayed when there is one)
    /// - the trigger response carries no `snapshot_id` (status 500, no fetch)
    /// - the fetch call fails
    pub async fn collect(&self, url: &Url) -> Result<Value, AppError> {
        let job = self
            .trigger(url)
            .await
            .map_err(|err| job_failed(None, "trigger", err))?;

        tracing::info!(
            snapshot_id = %job.snapshot_id,
            stage = %JobStage::Triggered,
            url = %url,
            "Snapshot job triggered"
        );

        tracing::debug!(
            snapshot_id = %job.snapshot_id,
            stage = %JobStage::Waiting,
            delay_ms = self.delay.as_millis() as u64,
            "Waiting before fetching snapshot"
        );
        tokio::time::sleep(self.delay).await;

        let payload = self
            .provider
            .fetch_snapshot(&job.snapshot_id)
            .await
            .map_err(|err| job_failed(Some(&job.snapshot_id), "fetch", err))?;

        tracing::info!(
            snapshot_id = %job.snapshot_id,
            stage = %JobStage::Fetched,
            "Snapshot fetched"
        );

        Ok(payload)
    }

    /// Fetches a previously triggered snapshot without triggering anything.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `snapshot_id` is blank.
    ///
    /// Returns [`AppError::Upstream`] if the fetch call fails.
    pub async fn fetch(&self, snapshot_id: &str) -> Result<Value, AppError> {
        let snapshot_id = snapshot_id.trim();
        if snapshot_id.is_empty() {
            return Err(AppError::bad_request(
                "Snapshot id must not be empty",
                json!({ "field": "snapshot_id" }),
            ));
        }

        tracing::debug!(snapshot_id = %snapshot_id, "Fetching snapshot");

        self.provider
            .fetch_snapshot(snapshot_id)
            .await
            .map_err(|err| job_failed(Some(snapshot_id), "fetch", err))
    }

    async fn trigger(&self, url: &Url) -> Result<SnapshotJob, AppError> {
        let receipt = self.provider.trigger(url.as_str()).await?;

        match receipt.snapshot_id {
            Some(id) if !id.trim().is_empty() => Ok(SnapshotJob::new(id)),
            _ => Err(AppError::upstream(
                "No snapshot id in trigger response",
                json!({ "url": url.as_str() }),
            )),
        }
    }
}

fn job_failed(snapshot_id: Option<&str>, step: &'static str, err: AppError) -> AppError {
    tracing::warn!(
        snapshot_id = snapshot_id.unwrap_or("-"),
        stage = %JobStage::Failed,
        step,
        status = err.status_code().as_u16(),
        error = %err,
        "Snapshot job failed"
    );
    err
}
