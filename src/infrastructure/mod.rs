//! Infrastructure layer for external integrations.
//!
//! This layer implements the provider traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`providers`] - `reqwest`-backed clients for the profile, link and scrape providers

pub mod providers;
