//! Application layer services.
//!
//! Services sit between HTTP handlers and the provider traits. They apply the
//! gateway's own rules (empty-payload handling, the snapshot workflow) and
//! leave the transport to the infrastructure layer.
//!
//! # Available Services
//!
//! - [`services::profile_service::ProfileService`] - Profile lookup by username
//! - [`services::link_service::LinkService`] - Short link creation and analytics
//! - [`services::snapshot_service::SnapshotService`] - Trigger, wait and fetch of scrape snapshots

pub mod services;
