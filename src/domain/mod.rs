//! Domain layer: entities and provider contracts.
//!
//! The gateway owns no data of its own. Everything here describes what the
//! third-party providers hand back and the traits the application layer
//! calls them through.
//!
//! # Architecture
//!
//! - [`entities`] - Transient request/response shapes (never persisted)
//! - [`providers`] - Provider trait definitions, implemented in
//!   [`crate::infrastructure::providers`]
//!
//! # Design Principles
//!
//! - No dependency on `reqwest` or `axum`; providers are reached only
//!   through the traits
//! - Provider traits are mocked with `mockall` in unit tests

pub mod entities;
pub mod providers;
