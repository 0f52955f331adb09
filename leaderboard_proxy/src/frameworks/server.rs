// Framework bootstrap for the leaderboard proxy runtime.

use crate::frameworks::config::{self, ProxyConfig};
use crate::interface_adapters::clients::ReqwestFetcher;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::net::SocketAddr;
use std::{io::Result, sync::Arc};

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, config: ProxyConfig) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state(config)?;

    // Start the web server with the HTTP routes wired up.
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::new(config::bind_addr(), config::http_port());

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, ProxyConfig::from_env()).await
}

fn build_state(config: ProxyConfig) -> Result<Arc<AppState>> {
    let upstream = ReqwestFetcher::new(config.upstream_timeout).map_err(|e| {
        tracing::error!(error = %e, "failed to initialize upstream client");
        std::io::Error::other(format!("failed to initialize upstream client: {e}"))
    })?;
    tracing::debug!(
        upstream_base_url = %config.upstream_base_url,
        upstream_timeout_ms = config.upstream_timeout.map(|t| t.as_millis() as u64),
        "upstream client configured."
    );

    Ok(Arc::new(AppState {
        upstream: Arc::new(upstream),
        upstream_base_url: config.upstream_base_url,
    }))
}
