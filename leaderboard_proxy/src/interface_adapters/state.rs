use crate::domain::UpstreamFetcher;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub upstream: Arc<dyn UpstreamFetcher>,
    pub upstream_base_url: String,
}
