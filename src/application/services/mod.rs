//! Business logic services for the application layer.

pub mod link_service;
pub mod profile_service;
pub mod snapshot_service;

pub use link_service::LinkService;
pub use profile_service::ProfileService;
pub use snapshot_service::SnapshotService;
