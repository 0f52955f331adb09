use std::{env, net::IpAddr, time::Duration};

// Runtime/server settings read from the environment.

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://scsa-backend-production.up.railway.app";

pub fn http_port() -> u16 {
    env::var("PROXY_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
}

pub fn bind_addr() -> IpAddr {
    env::var("PROXY_BIND_ADDR")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(IpAddr::from([127, 0, 0, 1]))
}

pub fn upstream_base_url() -> String {
    env::var("UPSTREAM_BASE_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string())
}

// Unset, unparseable or zero means no timeout.
pub fn upstream_timeout() -> Option<Duration> {
    env::var("UPSTREAM_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|millis| *millis > 0)
        .map(Duration::from_millis)
}

// Settings needed to build the proxy state, separate from the listener address.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub upstream_base_url: String,
    pub upstream_timeout: Option<Duration>,
}

impl ProxyConfig {
    pub fn from_env() -> Self {
        Self {
            upstream_base_url: upstream_base_url(),
            upstream_timeout: upstream_timeout(),
        }
    }
}
