// Shared helpers that start a stub upstream and the proxy on ephemeral ports.
use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use leaderboard_proxy::ProxyConfig;
use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize)]
struct UpstreamQuery {
    page: String,
}

// Stub leaderboard. Special pages select the failure modes under test.
async fn stub_leaderboard(Query(query): Query<UpstreamQuery>) -> Response {
    match query.page.as_str() {
        "html" => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        "missing" => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "message": "page not found" })),
        )
            .into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(serde_json::json!({ "entries": [] })).into_response()
        }
        page => Json(serde_json::json!({ "page": page, "entries": [] })).into_response(),
    }
}

// Start the stub upstream and return its base URL.
pub async fn spawn_upstream() -> String {
    let app = Router::new().route("/api/leaderboard", get(stub_leaderboard));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral upstream port");
    let addr = listener.local_addr().expect("get upstream local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("upstream failed");
    });
    format!("http://{addr}")
}

// Base URL that refuses connections: bind a port, then release it.
pub async fn closed_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    format!("http://{addr}")
}

// Start the proxy against the given upstream and return its base URL.
pub async fn spawn_proxy(config: ProxyConfig) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral proxy port");
    let addr = listener.local_addr().expect("get proxy local addr");
    tokio::spawn(async move {
        leaderboard_proxy::run(listener, config)
            .await
            .expect("proxy failed");
    });
    format!("http://{addr}")
}

pub fn config_for(upstream_base_url: String) -> ProxyConfig {
    ProxyConfig {
        upstream_base_url,
        upstream_timeout: None,
    }
}
