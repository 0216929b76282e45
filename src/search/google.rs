//! Google Custom Search JSON API client.

use super::types::{from_ureq, SearchError, SearchHit};
use super::SearchBackend;
use serde::Deserialize;
use std::time::Duration;

const SERVICE: &str = "Google Custom Search";
const ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";
/// The API refuses `num` outside 1..=10.
const MAX_RESULTS: usize = 10;

#[derive(Deserialize, Debug, Default)]
struct CustomSearchResponse {
    #[serde(default)]
    items: Vec<SearchHit>,
}

pub struct GoogleSearch {
    agent: ureq::Agent,
    api_key: String,
    search_engine_id: String,
}

impl GoogleSearch {
    pub fn new(api_key: impl Into<String>, search_engine_id: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(15))
            .user_agent(concat!("petscout/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            agent,
            api_key: api_key.into(),
            search_engine_id: search_engine_id.into(),
        }
    }
}

impl SearchBackend for GoogleSearch {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, SearchError> {
        let num = limit.clamp(1, MAX_RESULTS).to_string();
        log::info!("Querying {} for: {}", SERVICE, query);

        let response = self
            .agent
            .get(ENDPOINT)
            .query("q", query)
            .query("key", &self.api_key)
            .query("cx", &self.search_engine_id)
            .query("num", &num)
            .call()
            .map_err(|e| from_ureq(SERVICE, e))?;

        let body = response.into_string().map_err(|e| SearchError::InvalidResponse {
            service: SERVICE,
            message: e.to_string(),
        })?;
        parse_response(&body)
    }
}

/// Decode a response body. A body without `items` is a search with no hits.
fn parse_response(body: &str) -> Result<Vec<SearchHit>, SearchError> {
    let parsed: CustomSearchResponse =
        serde_json::from_str(body).map_err(|e| SearchError::InvalidResponse {
            service: SERVICE,
            message: e.to_string(),
        })?;
    Ok(parsed.items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items() {
        let body = r#"{
            "kind": "customsearch#search",
            "items": [
                {"title": "Missing pug in Bondi", "link": "https://example.com/a", "snippet": "Last seen Friday", "displayLink": "example.com"},
                {"title": "Pug found Coogee", "link": "https://example.com/b", "snippet": "Wearing a red collar"}
            ]
        }"#;
        let hits = parse_response(body).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Missing pug in Bondi");
        assert_eq!(hits[1].link, "https://example.com/b");
        assert_eq!(hits[1].snippet, "Wearing a red collar");
    }

    #[test]
    fn test_parse_no_items() {
        let body = r#"{"kind": "customsearch#search", "searchInformation": {"totalResults": "0"}}"#;
        assert!(parse_response(body).unwrap().is_empty());
    }

    #[test]
    fn test_parse_garbage() {
        let err = parse_response("not json").unwrap_err();
        assert!(matches!(err, SearchError::InvalidResponse { .. }));
    }
}
