use crate::interface_adapters::protocol::{ErrorResponse, PROXY_FAILED_MESSAGE, page_from_query};
use crate::interface_adapters::state::AppState;
use crate::use_cases::ProxyLeaderboardUseCase;
use axum::{
    Json,
    extract::{RawQuery, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;

// Relays one leaderboard page from the upstream. Every failure becomes a 500 with the
// same error shape; nothing propagates past this point.
#[tracing::instrument(name = "leaderboard", skip_all, fields(page = tracing::field::Empty))]
pub async fn leaderboard(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let page = page_from_query(query.as_deref());
    tracing::Span::current().record("page", page.as_str());

    let use_case = ProxyLeaderboardUseCase {
        fetcher: state.upstream.clone(),
        base_url: &state.upstream_base_url,
    };

    let body = use_case.execute(page).await.map_err(|err| {
        tracing::error!(error = %err, failure = ?err, "leaderboard proxy request failed.");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: PROXY_FAILED_MESSAGE.to_string(),
                detail: err.to_string(),
            }),
        )
    })?;

    Ok(([(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")], Json(body)))
}
