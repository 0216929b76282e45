//! petscout: find posts about a lost pet in the suburbs around where it went missing.

pub mod config;
pub mod location;
pub mod query;
pub mod report;
pub mod search;
