// Encyclopedia search: request URL, response decoding, article links.
// The HTTP request itself is made by the caller (the browser's fetch).

use crate::config::WikiConfig;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

lazy_static! {
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
}

#[derive(Debug, Error)]
pub enum WikiError {
    #[error("Search query cannot be empty")]
    EmptyQuery,

    #[error("Failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchHit {
    pub title: String,
    /// HTML fragment with the matched words wrapped in markup
    pub snippet: String,
    #[serde(rename = "pageid")]
    pub page_id: u64,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

/// Build the GET URL for a full-text search
pub fn search_url(config: &WikiConfig, query: &str) -> Result<String, WikiError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(WikiError::EmptyQuery);
    }

    Ok(format!(
        "{}?action=query&list=search&srsearch={}&format=json&origin=*&srlimit={}",
        config.endpoint,
        urlencoding::encode(query),
        config.result_limit
    ))
}

/// Decode a search response body. A body without results is an empty list.
pub fn parse_search_response(body: &str) -> Result<Vec<SearchHit>, WikiError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    let hits = response.query.map(|q| q.search).unwrap_or_default();
    tracing::debug!(hits = hits.len(), "decoded search response");
    Ok(hits)
}

impl SearchHit {
    pub fn article_url(&self, config: &WikiConfig) -> String {
        format!("{}{}", config.article_base, self.page_id)
    }

    /// Snippet with markup removed and common entities decoded
    pub fn plain_snippet(&self) -> String {
        let stripped = HTML_TAG.replace_all(&self.snippet, "");
        stripped
            .replace("&quot;", "\"")
            .replace("&#039;", "'")
            .replace("&#39;", "'")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
    }
}
