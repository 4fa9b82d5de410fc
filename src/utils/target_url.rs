//! Validation of URLs that are forwarded to providers.
//!
//! Both the link provider and the scrape provider are handed a URL taken
//! straight from the client. Only absolute HTTP(S) URLs with a host are let
//! through.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Parses `input` as an absolute HTTP(S) URL.
///
/// Relative references are rejected by the parser itself. The URL is
/// returned in the parser's serialization (lowercased scheme and host, root
/// path added when empty); nothing else is rewritten.
///
/// # Errors
///
/// Returns [`TargetUrlError::InvalidFormat`] for malformed or relative URLs.
/// Returns [`TargetUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`TargetUrlError::MissingHost`] when the host is empty.
///
/// # Examples
///
/// ```ignore
/// let url = parse_target_url("https://Example.com").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/");
///
/// assert!(parse_target_url("/relative/path").is_err());
/// assert!(parse_target_url("ftp://example.com").is_err());
/// ```
pub fn parse_target_url(input: &str) -> Result<Url, TargetUrlError> {
    let url = Url::parse(input.trim()).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(TargetUrlError::MissingHost);
    }

    Ok(url)
}
