//! Domain entities handled by the gateway.
//!
//! None of them has identity beyond a single request:
//!
//! - [`Profile`] - Social profile summary returned by the profile provider
//! - [`SnapshotJob`] - A scrape job accepted by the scrape provider
//! - [`JobStage`] - Where a snapshot workflow invocation currently is

pub mod profile;
pub mod snapshot;

pub use profile::Profile;
pub use snapshot::{JobStage, SnapshotJob};
