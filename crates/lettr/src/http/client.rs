//! HTTP transport for the Lettr API.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::response::translate;
use crate::error::{LettrError, Result};

const BASE_URL: &str = "https://app.lettr.com/api";
const USER_AGENT: &str = concat!("lettr-rust/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Internal HTTP client for communicating with the Lettr API.
///
/// Issues one authenticated request per call with a fixed 30 second timeout;
/// no retries and no call-scoped mutable state, so clones can be used from
/// concurrent tasks independently.
#[derive(Clone, Debug)]
pub(crate) struct HttpClient {
    client: ReqwestClient,
    api_key: String,
    base_url: String,
}

impl HttpClient {
    pub(crate) fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, api_key: api_key.into(), base_url: BASE_URL.to_string() })
    }

    /// Point the client at a different base URL (for mock servers).
    #[cfg(test)]
    pub(crate) fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Perform a GET request, decoding the response payload into `T`.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&[(&str, String)]>,
    ) -> Result<T> {
        let mut request = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json");
        if let Some(params) = query {
            if !params.is_empty() {
                request = request.query(params);
            }
        }

        debug!(path, "sending GET request");
        let response = request.send().await?;
        let status = response.status().as_u16();
        debug!(path, status, "received API response");
        let body = response.text().await?;

        translate(status, &body)?.ok_or_else(LettrError::empty_body)
    }

    /// Perform a POST request with a JSON body, decoding the response
    /// payload into `T`.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        let request = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .json(body);

        debug!(path, "sending POST request");
        let response = request.send().await?;
        let status = response.status().as_u16();
        debug!(path, status, "received API response");
        let body = response.text().await?;

        translate(status, &body)?.ok_or_else(LettrError::empty_body)
    }

    /// Perform a DELETE request. A 204 response succeeds with no body.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let request = self
            .client
            .delete(self.url(path))
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json");

        debug!(path, "sending DELETE request");
        let response = request.send().await?;
        let status = response.status().as_u16();
        debug!(path, status, "received API response");
        let body = response.text().await?;

        if status >= 400 {
            return Err(super::response::error_from_response(status, &body));
        }
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
