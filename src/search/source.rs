use crate::config::SearchConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("{url} returned a body that is not JSON: {details}")]
    Decode { url: String, details: String },
}

/// Read access to the storefront content API.
///
/// `path` is an expanded endpoint template (path plus query string); the
/// implementation owns the base URL.
#[async_trait]
pub trait SourceClient: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<Value, SourceError>;
}

/// [`SourceClient`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    /// Expects a config that went through [`SearchConfig::validated`].
    pub fn new(config: &SearchConfig) -> Result<Self, SourceError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(SourceError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SourceClient for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Value, SourceError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching candidate endpoint");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| SourceError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SourceError::Decode {
                url,
                details: e.to_string(),
            })
    }
}
