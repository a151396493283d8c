use crate::search::executor::QueryExecutor;
use crate::suggest::domain::models::{SearchRequest, SearchResponse};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// Async search handler
///
/// Each submitted request runs on its own task; responses come back tagged
/// with the request's session so the caller can drop stale ones. In-flight
/// tasks are never aborted.
pub struct SearchService {
    executor: QueryExecutor,
    runtime: Handle,
    response_tx: UnboundedSender<SearchResponse>,
    response_rx: UnboundedReceiver<SearchResponse>,
    in_flight: usize,
}

impl SearchService {
    pub fn new(executor: QueryExecutor, runtime: Handle) -> Self {
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        Self {
            executor,
            runtime,
            response_tx,
            response_rx,
            in_flight: 0,
        }
    }

    pub fn submit(&mut self, request: SearchRequest) {
        debug!(session = %request.session, query = %request.query, "dispatching search");
        let executor = self.executor.clone();
        let response_tx = self.response_tx.clone();
        self.in_flight += 1;

        self.runtime.spawn(async move {
            let items = executor.execute(&request.query).await;
            // The receiver only goes away when the search box is torn down
            let _ = response_tx.send(SearchResponse {
                session: request.session,
                query: request.query,
                items,
            });
        });
    }

    /// Check for a finished search (non-blocking).
    pub fn poll_response(&mut self) -> Option<SearchResponse> {
        let response = self.response_rx.try_recv().ok();
        if response.is_some() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        response
    }

    /// Wait for the next finished search.
    pub async fn next_response(&mut self) -> Option<SearchResponse> {
        let response = self.response_rx.recv().await;
        if response.is_some() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        response
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
