//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Provider payloads that are passed through are not
//! modelled here; handlers return them as `serde_json::Value`.

pub mod health;
pub mod link;
pub mod profile;
pub mod snapshot;
