use crate::domain::{LeaderboardPage, ProxyFailure, UpstreamFetcher};
use serde_json::Value;

// Upstream path serving paged leaderboard data.
const LEADERBOARD_PATH: &str = "/api/leaderboard";

// Interpolate the page into the upstream URL without encoding or validation.
pub fn leaderboard_url(base_url: &str, page: &LeaderboardPage) -> String {
    format!(
        "{}{LEADERBOARD_PATH}?page={}",
        base_url.trim_end_matches('/'),
        page.as_str()
    )
}

// Forwards one leaderboard page request to the upstream with an injected fetcher.
pub struct ProxyLeaderboardUseCase<'a, F> {
    pub fetcher: F,
    pub base_url: &'a str,
}

impl<F> ProxyLeaderboardUseCase<'_, F>
where
    F: UpstreamFetcher,
{
    pub async fn execute(&self, page: LeaderboardPage) -> Result<Value, ProxyFailure> {
        let url = leaderboard_url(self.base_url, &page);
        tracing::debug!(%url, "forwarding leaderboard request");

        // Single attempt; failures go straight back to the handler.
        self.fetcher.get_json(&url).await
    }
}
