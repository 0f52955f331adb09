#[tokio::main]
async fn main() {
    // Startup and serve errors are logged where they happen.
    if leaderboard_proxy::run_with_config().await.is_err() {
        std::process::exit(1);
    }
}
