//! External search collaborators: a web search backend and a group post feed.
//!
//! Clients return typed errors; deciding what a failure means for the run is
//! left to the caller (see [`crate::report`]).

pub mod facebook;
pub mod google;
pub mod types;

pub use facebook::FacebookGroupFeed;
pub use google::GoogleSearch;
pub use types::{GroupPost, SearchError, SearchHit};

/// A web search engine taking a single query string.
pub trait SearchBackend {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, SearchError>;
}

/// A source of recent posts, newest first.
pub trait PostFeed {
    fn recent_posts(&self, limit: usize) -> Result<Vec<GroupPost>, SearchError>;
}
