//! Runtime configuration for the search box

use crate::suggest::constants::{BLUR_GRACE_MS, DEBOUNCE_MS};
use crate::suggest::domain::models::Domain;
use std::time::Duration;
use thiserror::Error;

/// Placeholder replaced by the URL-encoded query in endpoint templates.
pub const QUERY_PLACEHOLDER: &str = "{q}";

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Candidate product endpoints, highest priority first.
pub const DEFAULT_PRODUCT_ENDPOINTS: &[&str] = &[
    "/products/search?q={q}",
    "/products?search={q}",
    "/products?q={q}",
];

/// Candidate service endpoints, highest priority first.
pub const DEFAULT_SERVICE_ENDPOINTS: &[&str] = &[
    "/services/search?q={q}",
    "/services?search={q}",
    "/drones?search={q}",
];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("base URL is empty")]
    EmptyBaseUrl,
    #[error("invalid base URL '{url}': {details}")]
    InvalidBaseUrl { url: String, details: String },
    #[error("no candidate endpoints configured for {domain} search")]
    NoEndpoints { domain: Domain },
    #[error("endpoint '{template}' has no {{q}} placeholder")]
    MissingPlaceholder { template: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub base_url: String,
    pub product_endpoints: Vec<String>,
    pub service_endpoints: Vec<String>,
    pub debounce: Duration,
    pub blur_grace: Duration,
    /// Per-request timeout; `None` lets a hung source delay only its own domain.
    pub request_timeout: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            product_endpoints: DEFAULT_PRODUCT_ENDPOINTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            service_endpoints: DEFAULT_SERVICE_ENDPOINTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            debounce: Duration::from_millis(DEBOUNCE_MS),
            blur_grace: Duration::from_millis(BLUR_GRACE_MS),
            request_timeout: None,
        }
    }
}

impl SearchConfig {
    pub fn endpoints(&self, domain: Domain) -> &[String] {
        match domain {
            Domain::Product => &self.product_endpoints,
            Domain::Service => &self.service_endpoints,
        }
    }

    /// Normalize the base URL and check every setting.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url(&self.base_url)?;
        for domain in Domain::ALL {
            let endpoints = self.endpoints(domain);
            if endpoints.is_empty() {
                return Err(ConfigError::NoEndpoints { domain });
            }
            if let Some(template) = endpoints.iter().find(|t| !t.contains(QUERY_PLACEHOLDER)) {
                return Err(ConfigError::MissingPlaceholder {
                    template: template.clone(),
                });
            }
        }
        Ok(self)
    }
}

/// Add `http://` when no scheme is given and drop trailing slashes.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };
    reqwest::Url::parse(&with_scheme).map_err(|e| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        details: e.to_string(),
    })?;
    Ok(with_scheme)
}

/// Substitute the URL-encoded query into an endpoint template.
pub fn expand_endpoint(template: &str, query: &str) -> String {
    template.replace(QUERY_PLACEHOLDER, &urlencoding::encode(query))
}
