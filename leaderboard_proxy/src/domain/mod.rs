mod leaderboard;

// Re-export the domain boundary types and ports.
pub use leaderboard::{LeaderboardPage, ProxyFailure, UpstreamFetcher};
