//! HTTP clients for the third-party providers.
//!
//! All clients share one `reqwest::Client` built by [`build_http_client`] and
//! funnel responses through the same status/payload handling in [`http`].
//!
//! - [`InstagramClient`] - Profile lookups via the Instagram web API
//! - [`DubClient`] - Short links and analytics via the Dub API
//! - [`BrightDataClient`] - Scrape jobs via the Bright Data datasets API

mod brightdata;
mod dub;
pub mod http;
mod instagram;

pub use brightdata::BrightDataClient;
pub use dub::DubClient;
pub use http::build_http_client;
pub use instagram::InstagramClient;
