//! HTTP API layer for request/response handling.
//!
//! This layer validates request shapes, calls exactly one application service
//! per request and formats the response. Every failure leaves through
//! [`crate::error::AppError`].
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
