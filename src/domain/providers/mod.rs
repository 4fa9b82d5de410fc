//! Provider trait definitions for the domain layer.
//!
//! Each trait abstracts one third-party API. Services depend on the trait,
//! never on the HTTP client behind it.
//!
//! # Architecture
//!
//! - Traits define the contract for outbound calls
//! - Implementations live in `crate::infrastructure::providers`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Providers
//!
//! - [`ProfileProvider`] - Social profile lookup by username
//! - [`LinkProvider`] - Short link creation and link analytics
//! - [`ScrapeProvider`] - Asynchronous scrape jobs and their snapshots

pub mod link_provider;
pub mod profile_provider;
pub mod scrape_provider;

pub use link_provider::LinkProvider;
pub use profile_provider::ProfileProvider;
pub use scrape_provider::{ScrapeProvider, TriggerReceipt};

#[cfg(test)]
pub use link_provider::MockLinkProvider;
#[cfg(test)]
pub use profile_provider::MockProfileProvider;
#[cfg(test)]
pub use scrape_provider::MockScrapeProvider;
