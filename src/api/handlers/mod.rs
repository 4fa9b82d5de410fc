//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one provider-facing capability.

pub mod health;
pub mod links;
pub mod profile;
pub mod snapshot;

pub use health::health_handler;
pub use links::{analytics_handler, create_link_handler};
pub use profile::profile_handler;
pub use snapshot::{get_user_profile_handler, snapshot_handler};
