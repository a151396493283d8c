use crate::config::{SearchConfig, expand_endpoint};
use crate::schemas::catalog::{extract_records, merge, normalize_records};
use crate::search::source::SourceClient;
use crate::suggest::domain::models::{Domain, ResultItem};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs one query against both content domains.
///
/// Each domain walks its candidate endpoints in priority order and stops at
/// the first one that answers with a list. A domain whose candidates all fail
/// contributes nothing; it never blocks or fails the other domain.
#[derive(Clone)]
pub struct QueryExecutor {
    source: Arc<dyn SourceClient>,
    product_endpoints: Vec<String>,
    service_endpoints: Vec<String>,
}

impl QueryExecutor {
    pub fn new(source: Arc<dyn SourceClient>, config: &SearchConfig) -> Self {
        Self {
            source,
            product_endpoints: config.product_endpoints.clone(),
            service_endpoints: config.service_endpoints.clone(),
        }
    }

    fn endpoints(&self, domain: Domain) -> &[String] {
        match domain {
            Domain::Product => &self.product_endpoints,
            Domain::Service => &self.service_endpoints,
        }
    }

    /// Query both domains concurrently; product items first, then services.
    pub async fn execute(&self, query: &str) -> Vec<ResultItem> {
        let start = Instant::now();
        let (products, services) = futures::join!(
            self.query_domain(Domain::Product, query),
            self.query_domain(Domain::Service, query)
        );

        info!(
            query,
            products = products.len(),
            services = services.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search completed"
        );
        merge(products, services)
    }

    pub async fn query_domain(&self, domain: Domain, query: &str) -> Vec<ResultItem> {
        for (rank, template) in self.endpoints(domain).iter().enumerate() {
            let path = expand_endpoint(template, query);
            match self.source.fetch(&path).await {
                Ok(body) => match extract_records(&body) {
                    Some(records) => {
                        debug!(%domain, rank, %path, records = records.len(), "candidate answered");
                        return normalize_records(domain, records);
                    }
                    None => {
                        debug!(%domain, rank, %path, "candidate body holds no list, trying next");
                    }
                },
                Err(e) => {
                    debug!(%domain, rank, %path, error = %e, "candidate failed, trying next");
                }
            }
        }

        warn!(%domain, query, "every candidate endpoint failed; no results from this domain");
        Vec::new()
    }
}
