//! Shared application state injected into every handler.

use std::sync::Arc;

use anyhow::{Context, Result};
use url::Url;

use crate::application::services::{LinkService, ProfileService, SnapshotService};
use crate::config::Config;
use crate::infrastructure::providers::{
    BrightDataClient, DubClient, InstagramClient, build_http_client,
};

/// Which provider credentials were present at startup.
///
/// Only reported by the health endpoint; requests are never refused because
/// of a missing credential.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialStatus {
    pub link_provider: bool,
    pub scrape_provider: bool,
}

impl CredentialStatus {
    pub fn from_config(config: &Config) -> Self {
        Self {
            link_provider: config.dub_token.is_some(),
            scrape_provider: config.brightdata_api_key.is_some()
                && config.brightdata_dataset_id.is_some(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub profile_service: Arc<ProfileService>,
    pub link_service: Arc<LinkService>,
    pub snapshot_service: Arc<SnapshotService>,
    pub credentials: CredentialStatus,
}

impl AppState {
    pub fn new(
        profile_service: Arc<ProfileService>,
        link_service: Arc<LinkService>,
        snapshot_service: Arc<SnapshotService>,
        credentials: CredentialStatus,
    ) -> Self {
        Self {
            profile_service,
            link_service,
            snapshot_service,
            credentials,
        }
    }

    /// Builds the provider clients and services described by `config`.
    ///
    /// All clients share one connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error if a provider base URL cannot be parsed or the HTTP
    /// client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = build_http_client(config.upstream_timeout())
            .context("Failed to build outbound HTTP client")?;

        let instagram_url =
            Url::parse(&config.instagram_api_url).context("Invalid INSTAGRAM_API_URL")?;
        let dub_url = Url::parse(&config.dub_api_url).context("Invalid DUB_API_URL")?;
        let brightdata_url =
            Url::parse(&config.brightdata_api_url).context("Invalid BRIGHTDATA_API_URL")?;

        let profile_provider = Arc::new(InstagramClient::new(http.clone(), instagram_url));
        let link_provider = Arc::new(DubClient::new(
            http.clone(),
            dub_url,
            config.dub_token.clone(),
        ));
        let scrape_provider = Arc::new(BrightDataClient::new(
            http,
            brightdata_url,
            config.brightdata_api_key.clone(),
            config.brightdata_dataset_id.clone(),
        ));

        Ok(Self::new(
            Arc::new(ProfileService::new(profile_provider)),
            Arc::new(LinkService::new(link_provider)),
            Arc::new(SnapshotService::new(
                scrape_provider,
                config.snapshot_delay(),
            )),
            CredentialStatus::from_config(config),
        ))
    }
}
