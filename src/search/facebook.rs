//! Facebook Graph API group feed client.

use super::types::{api_error_message, from_ureq, GroupPost, SearchError};
use super::PostFeed;
use serde::Deserialize;
use std::time::Duration;

const SERVICE: &str = "Facebook Graph";
const GRAPH_URL: &str = "https://graph.facebook.com";
const FIELDS: &str = "message,created_time,from,id";
const MAX_POSTS: usize = 100;

#[derive(Deserialize)]
struct FeedResponse {
    data: Option<Vec<FeedPost>>,
}

#[derive(Deserialize)]
struct FeedPost {
    message: Option<String>,
    created_time: Option<String>,
    from: Option<Author>,
    id: Option<String>,
}

#[derive(Deserialize)]
struct Author {
    name: Option<String>,
}

impl From<FeedPost> for GroupPost {
    fn from(p: FeedPost) -> Self {
        Self {
            message: p.message.unwrap_or_else(|| "No message".to_string()),
            created_time: p.created_time,
            from: p
                .from
                .and_then(|a| a.name)
                .unwrap_or_else(|| "Unknown".to_string()),
            post_id: p.id,
        }
    }
}

pub struct FacebookGroupFeed {
    agent: ureq::Agent,
    group_id: String,
    access_token: String,
}

impl FacebookGroupFeed {
    pub fn new(group_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(15))
            .build();
        Self {
            agent,
            group_id: group_id.into(),
            access_token: access_token.into(),
        }
    }

    fn feed_url(&self) -> String {
        format!("{}/{}/feed", GRAPH_URL, self.group_id)
    }
}

impl PostFeed for FacebookGroupFeed {
    fn recent_posts(&self, limit: usize) -> Result<Vec<GroupPost>, SearchError> {
        let limit = limit.clamp(1, MAX_POSTS).to_string();
        log::info!("Fetching group {} feed from {}", self.group_id, SERVICE);

        let response = self
            .agent
            .get(&self.feed_url())
            .query("access_token", &self.access_token)
            .query("fields", FIELDS)
            .query("limit", &limit)
            .call()
            .map_err(|e| from_ureq(SERVICE, e))?;

        let body = response.into_string().map_err(|e| SearchError::InvalidResponse {
            service: SERVICE,
            message: e.to_string(),
        })?;
        parse_feed(&body)
    }
}

/// Decode a feed body. A body without `data` is treated as an API error.
fn parse_feed(body: &str) -> Result<Vec<GroupPost>, SearchError> {
    let parsed: FeedResponse =
        serde_json::from_str(body).map_err(|e| SearchError::InvalidResponse {
            service: SERVICE,
            message: e.to_string(),
        })?;

    match parsed.data {
        Some(posts) => Ok(posts.into_iter().map(GroupPost::from).collect()),
        None => Err(SearchError::Api {
            service: SERVICE,
            message: api_error_message(body).unwrap_or_else(|| body.to_string()),
        }),
    }
}
