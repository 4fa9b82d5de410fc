//! Dub API client for short links and link analytics.

use async_trait::async_trait;
use serde_json::{Value, json};
use url::Url;

use super::http::{endpoint, read_payload, transport_error};
use crate::domain::providers::LinkProvider;
use crate::error::AppError;

const PROVIDER: &str = "dub";

/// Link provider backed by the Dub REST API.
///
/// The access token is optional: without it requests go out unauthenticated
/// and the provider's 401 is relayed to the caller.
pub struct DubClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl DubClient {
    pub fn new(http: reqwest::Client, base_url: Url, token: Option<String>) -> Self {
        Self {
            http,
            base_url,
            token,
        }
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl LinkProvider for DubClient {
    async fn create_link(&self, url: &str) -> Result<Option<Value>, AppError> {
        let request_url = endpoint(&self.base_url, &["links"])?;

        tracing::debug!(url = %url, endpoint = %request_url, "Creating link at provider");

        let response = self
            .authorize(self.http.post(request_url))
            .json(&json!({ "url": url }))
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;

        read_payload(PROVIDER, response).await
    }

    async fn retrieve_analytics(&self, link_id: &str) -> Result<Option<Value>, AppError> {
        let mut request_url = endpoint(&self.base_url, &["analytics"])?;
        request_url.query_pairs_mut().append_pair("linkId", link_id);

        tracing::debug!(link_id = %link_id, endpoint = %request_url, "Retrieving analytics from provider");

        let response = self
            .authorize(self.http.get(request_url))
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;

        read_payload(PROVIDER, response).await
    }
}
