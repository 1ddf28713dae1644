//! HTTP implementation of [`HistoryApi`](crate::HistoryApi).
//!
//! Posts the aggregated read request as JSON to the history bridge endpoint
//! and decodes the bucket tree from the response.

use crate::model::DataReadResult;
use crate::request::ReadRequest;
use crate::{HistoryApi, HistoryError};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

/// Client for the history read endpoint using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestHistoryClient {
    base_url: String,
    access_token: SecretString,
    client: reqwest::Client,
}

impl ReqwestHistoryClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the history API (e.g., "https://www.googleapis.com")
    /// * `access_token` - OAuth access token obtained by the host application
    pub fn new(base_url: &str, access_token: SecretString) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
            client: reqwest::Client::new(),
        }
    }

    fn read_url(&self) -> String {
        format!("{}/fitness/v1/history:read", self.base_url)
    }

    /// Extract error information from a failed response.
    async fn error_from_response(&self, resp: reqwest::Response) -> HistoryError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body_snippet: String = body.chars().take(256).collect();

        match status {
            401 | 403 => HistoryError::Auth(body_snippet),
            _ => HistoryError::DataUnavailable(format!("status {status}: {body_snippet}")),
        }
    }
}

#[async_trait]
impl HistoryApi for ReqwestHistoryClient {
    async fn read_data(&self, request: &ReadRequest) -> Result<DataReadResult, HistoryError> {
        let resp = self
            .client
            .post(self.read_url())
            .bearer_auth(self.access_token.expose_secret())
            .json(request)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(self.error_from_response(resp).await);
        }
        Ok(resp.json::<DataReadResult>().await?)
    }
}
