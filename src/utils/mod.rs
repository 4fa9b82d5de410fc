//! Utility functions shared across layers.
//!
//! - [`target_url`] - Validation of the absolute URLs forwarded to providers
//! - [`mask`] - Redaction of secrets before they reach the logs

pub mod mask;
pub mod target_url;
