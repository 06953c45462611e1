//! The HTTP boundary: one authenticated GET, returning status and body.

use crate::core::domain::{
    error::{XtremioError, XtremioResult},
    model::{credentials::Credentials, xtremio_config::XtremioConfig},
};
use async_trait::async_trait;
use reqwest::{Client, header::ACCEPT};
use url::Url;

/// Status and raw body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues authenticated GET requests against the array.
///
/// Implementations report network and TLS failures as
/// [`XtremioError::Transport`]; status interpretation is left to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(
        &self,
        url: Url,
        credentials: &Credentials,
        query: &[(String, String)],
    ) -> XtremioResult<TransportResponse>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    /// Builds the HTTP client from the TLS and timeout settings.
    ///
    /// # Errors
    /// Returns `XtremioError::Transport` if the HTTP client cannot be built.
    pub fn new(config: &XtremioConfig) -> XtremioResult<Self> {
        let mut builder = Client::builder().danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| XtremioError::Transport(e.to_string()))?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(
        &self,
        mut url: Url,
        credentials: &Credentials,
        query: &[(String, String)],
    ) -> XtremioResult<TransportResponse> {
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        let response = self
            .http_client
            .get(url)
            .basic_auth(
                credentials.username().as_str(),
                Some(credentials.password().as_str()),
            )
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| XtremioError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| XtremioError::Transport(format!("Failed to read response body: {}", e)))?;

        Ok(TransportResponse { status, body })
    }
}
