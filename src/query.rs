//! Search query construction.
//!
//! A [`SearchQuery`] holds the clauses; its `Display` impl is the only place that
//! knows the search engine's syntax:
//!
//! ```text
//! <base term>[ site:<domain>][ AND (<name> OR <name> ...)]
//! ```
//!
//! Names containing whitespace are wrapped in double quotes so they match as a
//! phrase. The name text itself is never rewritten.

use serde::Serialize;
use std::fmt;

/// Structured search query: base term, optional site restriction, OR-list of places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    base_term: String,
    site: Option<String>,
    any_of: Vec<String>,
}

impl SearchQuery {
    pub fn new(base_term: impl Into<String>) -> Self {
        Self {
            base_term: base_term.into(),
            site: None,
            any_of: Vec::new(),
        }
    }

    /// Restrict results to a domain. Blank strings clear the restriction.
    pub fn site(mut self, domain: impl Into<String>) -> Self {
        let domain = domain.into();
        let domain = domain.trim();
        self.site = (!domain.is_empty()).then(|| domain.to_string());
        self
    }

    /// Require at least one of these names to appear.
    pub fn any_of<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.any_of.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn base_term(&self) -> &str {
        &self.base_term
    }

    pub fn site_restriction(&self) -> Option<&str> {
        self.site.as_deref()
    }

    pub fn names(&self) -> &[String] {
        &self.any_of
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base_term)?;
        if let Some(site) = &self.site {
            write!(f, " site:{}", site)?;
        }
        if !self.any_of.is_empty() {
            write!(f, " AND (")?;
            for (i, name) in self.any_of.iter().enumerate() {
                if i > 0 {
                    write!(f, " OR ")?;
                }
                write_term(f, name)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

fn write_term(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    if name.contains(char::is_whitespace) && !name.contains('"') {
        write!(f, "\"{}\"", name)
    } else {
        write!(f, "{}", name)
    }
}

/// Build the query string for a base term, optional site domain (may be empty),
/// and the names of nearby locations.
pub fn build(base_term: &str, site_filter: &str, location_names: &[String]) -> String {
    SearchQuery::new(base_term)
        .site(site_filter)
        .any_of(location_names.iter().cloned())
        .to_string()
}
