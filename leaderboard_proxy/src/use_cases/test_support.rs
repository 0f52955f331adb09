use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{ProxyFailure, UpstreamFetcher};

// Fake upstream that records requested URLs and replays one canned outcome.
#[derive(Clone)]
pub(crate) struct RecordingFetcher {
    calls: Arc<Mutex<Vec<String>>>,
    outcome: Result<Value, ProxyFailure>,
}

impl RecordingFetcher {
    pub(crate) fn returning(body: Value) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            outcome: Ok(body),
        }
    }

    pub(crate) fn failing(failure: ProxyFailure) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            outcome: Err(failure),
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        let guard = self.calls.lock().expect("calls mutex poisoned");
        guard.clone()
    }
}

#[async_trait]
impl UpstreamFetcher for RecordingFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, ProxyFailure> {
        let mut guard = self.calls.lock().expect("calls mutex poisoned");
        guard.push(url.to_string());
        self.outcome.clone()
    }
}
