//! Shared HTTP plumbing for provider clients.

use std::time::Duration;

use crate::error::AppError;
use reqwest::StatusCode;
use serde_json::{Value, json};
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Longest upstream error body echoed back to clients.
const MAX_MESSAGE_LEN: usize = 500;

/// Builds the outbound HTTP client shared by every provider.
///
/// Without a `timeout` the client keeps `reqwest`'s default (no overall
/// request timeout).
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build()
}

/// Appends path `segments` to a provider base URL.
///
/// Segments are percent-encoded, so identifiers taken from clients cannot
/// escape the intended path.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, AppError> {
    let mut url = base.clone();

    url.path_segments_mut()
        .map_err(|_| {
            AppError::upstream(
                "Invalid provider base URL",
                json!({ "base_url": base.as_str() }),
            )
        })?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// Converts a transport-level failure (connect, timeout, body read) into an
/// upstream error with status 500.
pub(crate) fn transport_error(provider: &'static str, err: reqwest::Error) -> AppError {
    tracing::warn!(provider, error = %err, timeout = err.is_timeout(), "Provider request failed");
    AppError::upstream(
        format!("{provider} request failed: {err}"),
        json!({ "provider": provider }),
    )
}

/// Reads a provider response as an opaque JSON payload.
///
/// # Returns
///
/// - `Ok(Some(value))` for a 2xx response with a non-null JSON body
/// - `Ok(None)` for a 2xx response with an empty or `null` body
///
/// # Errors
///
/// Returns [`AppError::Upstream`] carrying the provider status for non-2xx
/// responses, and status 500 for unreadable bodies or malformed JSON.
pub(crate) async fn read_payload(
    provider: &'static str,
    response: reqwest::Response,
) -> Result<Option<Value>, AppError> {
    let body = read_body(provider, response).await?;

    if body.trim().is_empty() {
        return Ok(None);
    }

    Ok(match parse_json(provider, &body)? {
        Value::Null => None,
        value => Some(value),
    })
}

/// Reads a provider response that must carry a JSON document.
///
/// An explicit `null` is a document and is returned as is.
///
/// # Errors
///
/// Same as [`read_payload`], plus status 500 for a 2xx response with an
/// empty body.
pub(crate) async fn read_json(
    provider: &'static str,
    response: reqwest::Response,
) -> Result<Value, AppError> {
    let body = read_body(provider, response).await?;

    if body.trim().is_empty() {
        tracing::warn!(provider, "Provider returned an empty body");
        return Err(AppError::upstream(
            format!("Empty response from {provider}"),
            json!({ "provider": provider }),
        ));
    }

    parse_json(provider, &body)
}

/// Returns the body of a 2xx response, or the relayed provider error.
async fn read_body(provider: &'static str, response: reqwest::Response) -> Result<String, AppError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| transport_error(provider, e))?;

    if !status.is_success() {
        let message = upstream_message(&body, status);
        tracing::warn!(provider, status = status.as_u16(), message = %message, "Provider returned an error");
        return Err(AppError::upstream_status(
            status.as_u16(),
            message,
            json!({ "provider": provider, "status": status.as_u16() }),
        ));
    }

    Ok(body)
}

fn parse_json(provider: &'static str, body: &str) -> Result<Value, AppError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(provider, error = %e, "Provider returned malformed JSON");
        AppError::upstream(
            format!("Malformed JSON from {provider}: {e}"),
            json!({ "provider": provider }),
        )
    })
}

/// Extracts a human-readable message from a provider error body.
///
/// Looks for the usual JSON shapes (`error.message`, `message`, `error`,
/// `detail`), then falls back to the raw text and finally the reason phrase.
/// Never returns an empty string.
pub(crate) fn upstream_message(body: &str, status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        let candidates = [
            value.pointer("/error/message"),
            value.get("message"),
            value.get("error"),
            value.get("detail"),
        ];

        if let Some(message) = candidates
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
            .find(|s| !s.trim().is_empty())
        {
            return message.trim().to_string();
        }
    }

    let text = body.trim();
    if !text.is_empty() {
        return text.chars().take(MAX_MESSAGE_LEN).collect();
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Upstream returned status {}", status.as_u16()))
}
