use crate::domain::LeaderboardPage;
use serde::Serialize;

// Fixed message carried by every failed proxy response.
pub const PROXY_FAILED_MESSAGE: &str = "proxy request failed";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    // Always PROXY_FAILED_MESSAGE.
    pub error: String,
    // Message of the underlying failure.
    pub detail: String,
}

// Read `page` from a raw query string. A missing key falls back to the default page,
// an empty value stays empty, and repeated keys are joined with commas.
pub fn page_from_query(query: Option<&str>) -> LeaderboardPage {
    let values: Vec<String> = query
        .map(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .filter(|(key, _)| key == "page")
                .map(|(_, value)| value.into_owned())
                .collect()
        })
        .unwrap_or_default();

    if values.is_empty() {
        LeaderboardPage::default()
    } else {
        LeaderboardPage::new(values.join(","))
    }
}
