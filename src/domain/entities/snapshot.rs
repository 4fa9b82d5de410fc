//! Snapshot job entity and workflow stages.

use std::fmt;

/// A scrape job accepted by the scrape provider.
///
/// Only lives for the duration of one workflow invocation; nothing is kept
/// once the snapshot has been fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotJob {
    pub snapshot_id: String,
}

impl SnapshotJob {
    pub fn new(snapshot_id: impl Into<String>) -> Self {
        Self {
            snapshot_id: snapshot_id.into(),
        }
    }
}

/// Stage of a snapshot workflow invocation.
///
/// `Triggered -> Waiting -> Fetched`, or `Failed` from any stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStage {
    Triggered,
    Waiting,
    Fetched,
    Failed,
}

impl JobStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStage::Triggered => "triggered",
            JobStage::Waiting => "waiting",
            JobStage::Fetched => "fetched",
            JobStage::Failed => "failed",
        }
    }
}

impl fmt::Display for JobStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
