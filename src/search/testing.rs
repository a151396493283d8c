//! Scripted [`SourceClient`] for tests

use crate::search::source::{SourceClient, SourceError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{Barrier, Notify};

#[derive(Clone)]
pub(crate) enum Reply {
    Body(Value),
    Status(u16),
    /// Wait for the gate, then answer with the body
    Gated(Arc<Notify>, Value),
    /// Wait on the barrier, then answer with the body
    Rendezvous(Arc<Barrier>, Value),
}

/// Answers by exact path; unknown paths fail with status 404.
#[derive(Clone, Default)]
pub(crate) struct ScriptedSource {
    replies: Arc<Mutex<HashMap<String, Reply>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, path: &str, reply: Reply) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(path.to_string(), reply);
        self
    }

    pub(crate) fn body(self, path: &str, body: Value) -> Self {
        self.reply(path, Reply::Body(body))
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SourceClient for ScriptedSource {
    async fn fetch(&self, path: &str) -> Result<Value, SourceError> {
        self.calls.lock().unwrap().push(path.to_string());
        let reply = self.replies.lock().unwrap().get(path).cloned();
        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(status)) => Err(SourceError::Status {
                url: path.to_string(),
                status,
            }),
            Some(Reply::Gated(gate, body)) => {
                gate.notified().await;
                Ok(body)
            }
            Some(Reply::Rendezvous(barrier, body)) => {
                barrier.wait().await;
                Ok(body)
            }
            None => Err(SourceError::Status {
                url: path.to_string(),
                status: 404,
            }),
        }
    }
}
