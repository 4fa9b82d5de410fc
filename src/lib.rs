//! # Profile Gateway
//!
//! A thin HTTP gateway in front of three third-party providers, built with
//! Axum and reqwest.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Transient entities and provider traits
//! - **Application Layer** ([`application`]) - Services, including the snapshot workflow
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP clients for the providers
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Social profile summary by username (Instagram web API)
//! - Short link creation and link analytics (Dub API)
//! - Scrape job trigger → fixed wait → snapshot fetch (Bright Data datasets API)
//! - Uniform JSON error responses with relayed provider status codes
//!
//! Nothing is persisted, cached or retried.
//!
//! ## Quick Start
//!
//! ```bash
//! export DUB_TOKEN="dub_..."
//! export BRIGHTDATA_API_KEY="..."
//! export BRIGHTDATA_DATASET_ID="gd_..."
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, ProfileService, SnapshotService};
    pub use crate::domain::entities::{JobStage, Profile, SnapshotJob};
    pub use crate::error::AppError;
    pub use crate::state::{AppState, CredentialStatus};
}
