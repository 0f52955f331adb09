pub mod proxy_leaderboard;

#[cfg(test)]
pub(crate) mod test_support;

pub use proxy_leaderboard::{ProxyLeaderboardUseCase, leaderboard_url};
