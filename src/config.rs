//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and handed to
//! [`crate::server::run`], which builds the provider clients from it.
//!
//! ## Provider credentials
//!
//! ```bash
//! export DUB_TOKEN="dub_xxxxxxxxxxxxxxxx"
//! export BRIGHTDATA_API_KEY="xxxxxxxxxxxxxxxx"
//! export BRIGHTDATA_DATASET_ID="gd_l1vikfch901nx3by4"
//! ```
//!
//! Credentials are optional at startup. A missing credential only shows up
//! when the corresponding provider rejects a call (and in `GET /health`).
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DUB_API_URL` - Link provider base URL (default: `https://api.dub.co`)
//! - `BRIGHTDATA_API_URL` - Scrape provider base URL (default: `https://api.brightdata.com`)
//! - `INSTAGRAM_API_URL` - Profile provider base URL (default: `https://i.instagram.com`)
//! - `SNAPSHOT_DELAY_SECS` - Wait between trigger and fetch (default: 5)
//! - `UPSTREAM_TIMEOUT_SECS` - Outbound request timeout (default: none)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::utils::mask::describe_secret;

pub const DEFAULT_DUB_API_URL: &str = "https://api.dub.co";
pub const DEFAULT_BRIGHTDATA_API_URL: &str = "https://api.brightdata.com";
pub const DEFAULT_INSTAGRAM_API_URL: &str = "https://i.instagram.com";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,

    /// Link provider bearer token (`DUB_TOKEN`).
    pub dub_token: Option<String>,
    pub dub_api_url: String,

    /// Scrape provider bearer key (`BRIGHTDATA_API_KEY`).
    pub brightdata_api_key: Option<String>,
    /// Dataset the scrape jobs are triggered on (`BRIGHTDATA_DATASET_ID`).
    pub brightdata_dataset_id: Option<String>,
    pub brightdata_api_url: String,

    pub instagram_api_url: String,

    /// Fixed wait between triggering a scrape job and fetching its snapshot.
    pub snapshot_delay_secs: u64,
    /// Outbound request timeout. `None` keeps the HTTP client default.
    pub upstream_timeout_secs: Option<u64>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let dub_token = load_optional("DUB_TOKEN");
        let dub_api_url =
            load_optional("DUB_API_URL").unwrap_or_else(|| DEFAULT_DUB_API_URL.to_string());

        let brightdata_api_key = load_optional("BRIGHTDATA_API_KEY");
        let brightdata_dataset_id = load_optional("BRIGHTDATA_DATASET_ID");
        let brightdata_api_url = load_optional("BRIGHTDATA_API_URL")
            .unwrap_or_else(|| DEFAULT_BRIGHTDATA_API_URL.to_string());

        let instagram_api_url = load_optional("INSTAGRAM_API_URL")
            .unwrap_or_else(|| DEFAULT_INSTAGRAM_API_URL.to_string());

        let snapshot_delay_secs = match load_optional("SNAPSHOT_DELAY_SECS") {
            Some(v) => v
                .parse::<u64>()
                .with_context(|| format!("SNAPSHOT_DELAY_SECS must be an integer, got '{v}'"))?,
            None => 5,
        };

        let upstream_timeout_secs = load_optional("UPSTREAM_TIMEOUT_SECS")
            .map(|v| {
                v.parse::<u64>().with_context(|| {
                    format!("UPSTREAM_TIMEOUT_SECS must be an integer, got '{v}'")
                })
            })
            .transpose()?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            dub_token,
            dub_api_url,
            brightdata_api_key,
            brightdata_dataset_id,
            brightdata_api_url,
            instagram_api_url,
            snapshot_delay_secs,
            upstream_timeout_secs,
        })
    }

    /// Validates the configuration.
    ///
    /// Provider credentials are not checked.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - a provider base URL is not an HTTP(S) URL
    /// - `upstream_timeout_secs` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        for (name, value) in [
            ("DUB_API_URL", &self.dub_api_url),
            ("BRIGHTDATA_API_URL", &self.brightdata_api_url),
            ("INSTAGRAM_API_URL", &self.instagram_api_url),
        ] {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                anyhow::bail!("{name} must start with 'http://' or 'https://', got '{value}'");
            }
            url::Url::parse(value).with_context(|| format!("{name} is not a valid URL"))?;
        }

        if self.upstream_timeout_secs == Some(0) {
            anyhow::bail!("UPSTREAM_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }

    pub fn snapshot_delay(&self) -> Duration {
        Duration::from_secs(self.snapshot_delay_secs)
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_secs.map(Duration::from_secs)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Dub API: {}", self.dub_api_url);
        tracing::info!("  Dub token: {}", describe_secret(self.dub_token.as_deref()));
        tracing::info!("  Bright Data API: {}", self.brightdata_api_url);
        tracing::info!(
            "  Bright Data key: {}",
            describe_secret(self.brightdata_api_key.as_deref())
        );
        tracing::info!(
            "  Bright Data dataset: {}",
            self.brightdata_dataset_id.as_deref().unwrap_or("not set")
        );
        tracing::info!("  Instagram API: {}", self.instagram_api_url);
        tracing::info!("  Snapshot delay: {}s", self.snapshot_delay_secs);

        match self.upstream_timeout_secs {
            Some(secs) => tracing::info!("  Upstream timeout: {}s", secs),
            None => tracing::info!("  Upstream timeout: client default"),
        }
    }
}

/// Reads an environment variable, treating empty values as unset.
fn load_optional(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
