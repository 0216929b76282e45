//! End-to-end run: filter → query → search, collected into a [`Report`].

use crate::config::SearchConfig;
use crate::location::{self, Location, NearbyLocation, ReferencePoint};
use crate::query::SearchQuery;
use crate::search::{GroupPost, PostFeed, SearchBackend, SearchHit};
use serde::Serialize;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub reference: ReferencePoint,
    pub radius_km: f64,
    pub nearby: Vec<NearbyLocation>,
    pub query: String,
    /// `None` when no search backend was used (dry run or missing credentials).
    pub hits: Option<Vec<SearchHit>>,
    /// `None` when no post feed was configured.
    pub posts: Option<Vec<GroupPost>>,
}

impl Report {
    pub fn nearby_names(&self) -> Vec<&str> {
        self.nearby.iter().map(|n| n.name.as_str()).collect()
    }
}

/// Run the pipeline over already-loaded locations.
///
/// Failures from either collaborator are logged and reported as an empty result set.
pub fn run(
    config: &SearchConfig,
    locations: &[Location],
    search: Option<&dyn SearchBackend>,
    feed: Option<&dyn PostFeed>,
) -> Report {
    let nearby = location::locations_within_radius(&config.reference, locations, config.radius_km);

    let query = SearchQuery::new(config.search_term.as_str())
        .site(config.site_filter.as_str())
        .any_of(nearby.iter().map(|n| n.name.as_str()))
        .to_string();

    let hits = search.map(|backend| {
        backend
            .search(&query, config.num_results)
            .unwrap_or_else(|e| {
                log::warn!("Search failed: {}", e);
                Vec::new()
            })
    });

    let posts = match feed {
        Some(feed) => Some(feed.recent_posts(config.num_results).unwrap_or_else(|e| {
            log::warn!("Fetching posts failed: {}", e);
            Vec::new()
        })),
        None => {
            log::debug!("No post feed configured, skipping");
            None
        }
    };

    Report {
        reference: config.reference,
        radius_km: config.radius_km,
        nearby,
        query,
        hits,
        posts,
    }
}

/// Plain-text rendering for the terminal.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "Nearby suburbs ({} found): {}",
        report.nearby.len(),
        report.nearby_names().join(", ")
    );
    let _ = writeln!(out, "\nSearch query:\n{}\n{}", report.query, heavy);

    if let Some(hits) = &report.hits {
        if hits.is_empty() {
            let _ = writeln!(out, "No search results found or an error occurred.");
        }
        for (i, hit) in hits.iter().enumerate() {
            let _ = writeln!(out, "{}. {}\n{}\n{}\n{}", i + 1, hit.title, hit.link, hit.snippet, light);
        }
    }

    if let Some(posts) = &report.posts {
        let _ = writeln!(out, "\nGroup posts:\n{}", heavy);
        if posts.is_empty() {
            let _ = writeln!(out, "No group posts found or an error occurred.");
        }
        for (i, post) in posts.iter().enumerate() {
            let created = match post.created_at() {
                Some(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
                None => post.created_time.clone().unwrap_or_else(|| "unknown".into()),
            };
            let _ = writeln!(out, "{}. From: {}", i + 1, post.from);
            let _ = writeln!(out, "Message: {}", post.message);
            let _ = writeln!(out, "Created Time: {}", created);
            let _ = writeln!(out, "Post ID: {}", post.post_id.as_deref().unwrap_or("-"));
            let _ = writeln!(out, "{}", light);
        }
    }

    out
}
