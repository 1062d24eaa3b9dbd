//! Search query handling

use tracing::error;
use url::Url;

use crate::constants::search::{ENGINE_URL, QUERY_PARAM};

/// Search URL for a submitted query, `None` when the trimmed query is empty
pub fn search_url(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    Url::parse_with_params(ENGINE_URL, &[(QUERY_PARAM, query)])
        .inspect_err(|e| error!(engine = ENGINE_URL, error = %e, "Invalid search engine URL"))
        .ok()
        .map(String::from)
}
