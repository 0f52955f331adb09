use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

// Page used when the caller does not send one.
const DEFAULT_PAGE: &str = "1";

// Page selector forwarded to the upstream as-is. No numeric validation happens here;
// the upstream decides what a page means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardPage(String);

impl LeaderboardPage {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LeaderboardPage {
    fn default() -> Self {
        Self(DEFAULT_PAGE.to_string())
    }
}

// Every way the upstream round trip can fail. Handlers collapse all of these into one
// 500 response, so the variants only exist for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyFailure {
    // Request could not be built or sent (bad URL, DNS, connect, timeout).
    Transport(String),
    // Upstream answered but the body was not JSON.
    Decode(String),
}

impl ProxyFailure {
    pub fn message(&self) -> &str {
        match self {
            ProxyFailure::Transport(message) | ProxyFailure::Decode(message) => message,
        }
    }
}

impl fmt::Display for ProxyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ProxyFailure {}

// Outbound HTTP port. The use case depends on this trait, not on reqwest.
#[async_trait]
pub trait UpstreamFetcher: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value, ProxyFailure>;
}

#[async_trait]
impl<T> UpstreamFetcher for Arc<T>
where
    T: UpstreamFetcher + ?Sized,
{
    async fn get_json(&self, url: &str) -> Result<Value, ProxyFailure> {
        (**self).get_json(url).await
    }
}
