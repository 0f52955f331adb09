use crate::domain::{ProxyFailure, UpstreamFetcher};
use async_trait::async_trait;
use serde_json::Value;
use std::error::Error;
use std::time::Duration;

// Thin reqwest wrapper that implements the upstream port.
#[derive(Clone)]
pub struct ReqwestFetcher {
    http: reqwest::Client,
}

impl ReqwestFetcher {
    // `None` leaves the client without a request timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
        })
    }
}

#[async_trait]
impl UpstreamFetcher for ReqwestFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, ProxyFailure> {
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| ProxyFailure::Transport(failure_message(err)))?;
        let status = res.status();

        // Non-2xx bodies are relayed like any other JSON; only decoding can fail them.
        if !status.is_success() {
            tracing::warn!(%status, "upstream returned non-success status.");
        }

        res.json::<Value>()
            .await
            .map_err(|err| ProxyFailure::Decode(failure_message(err)))
    }
}

// Drop the upstream URL and keep the underlying cause, which reqwest leaves out of its
// own Display.
fn failure_message(err: reqwest::Error) -> String {
    error_chain(&err.without_url())
}

// Join an error and its sources with ": ", skipping sources that repeat the previous text.
fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut last = message.clone();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if text != last {
            message.push_str(": ");
            message.push_str(&text);
            last = text;
        }
        source = cause.source();
    }
    message
}
