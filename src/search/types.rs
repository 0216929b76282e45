//! Result and error types shared by the search clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One web search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

/// One post from a group feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupPost {
    pub message: String,
    /// Timestamp exactly as the API sent it.
    pub created_time: Option<String>,
    pub from: String,
    pub post_id: Option<String>,
}

impl GroupPost {
    /// Parsed `created_time`, when it is in the Graph API's `+0000` offset format.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_time.as_deref()?;
        DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z")
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Network error calling {service}: {message}")]
    Network {
        service: &'static str,
        message: String,
    },

    #[error("{service} returned HTTP {status}: {message}")]
    Status {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("Invalid {service} response: {message}")]
    InvalidResponse {
        service: &'static str,
        message: String,
    },

    #[error("{service} API error: {message}")]
    Api {
        service: &'static str,
        message: String,
    },
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Pull `error.message` out of a JSON error body (both Google and Graph use this shape).
pub(crate) fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|e| e.error.message)
}

/// Map a failed `ureq` call onto [`SearchError`].
pub(crate) fn from_ureq(service: &'static str, err: ureq::Error) -> SearchError {
    match err {
        ureq::Error::Status(status, response) => {
            let body = response.into_string().unwrap_or_default();
            let message = api_error_message(&body).unwrap_or_else(|| {
                if body.is_empty() {
                    "empty response body".to_string()
                } else {
                    body
                }
            });
            SearchError::Status {
                service,
                status,
                message,
            }
        }
        ureq::Error::Transport(t) => SearchError::Network {
            service,
            message: t.to_string(),
        },
    }
}
