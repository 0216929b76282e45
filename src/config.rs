//! Run configuration, assembled once at startup and passed by reference.

use crate::location::ReferencePoint;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_RADIUS_KM: f64 = 30.0;
pub const DEFAULT_SEARCH_TERM: &str = "missing pug";
pub const DEFAULT_NUM_RESULTS: usize = 10;
pub const DEFAULT_LOCATIONS_FILE: &str = "australian_suburbs.csv";

/// Credentials for the Custom Search JSON API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleCredentials {
    pub api_key: String,
    pub search_engine_id: String,
}

/// Group and token for reading a Facebook group feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacebookCredentials {
    pub group_id: String,
    pub access_token: String,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub locations_file: PathBuf,
    pub reference: ReferencePoint,
    pub radius_km: f64,
    pub search_term: String,
    /// Domain for a `site:` restriction. Empty means unrestricted.
    pub site_filter: String,
    pub num_results: usize,
    pub google: Option<GoogleCredentials>,
    pub facebook: Option<FacebookCredentials>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Reference latitude {0} is outside -90..90")]
    Latitude(f64),

    #[error("Reference longitude {0} is outside -180..180")]
    Longitude(f64),

    #[error("Radius must be a non-negative number of km, got {0}")]
    Radius(f64),

    #[error("Search term must not be empty")]
    EmptyTerm,
}

impl SearchConfig {
    pub fn new(reference: ReferencePoint) -> Self {
        Self {
            locations_file: PathBuf::from(DEFAULT_LOCATIONS_FILE),
            reference,
            radius_km: DEFAULT_RADIUS_KM,
            search_term: DEFAULT_SEARCH_TERM.to_string(),
            site_filter: String::new(),
            num_results: DEFAULT_NUM_RESULTS,
            google: None,
            facebook: None,
        }
    }

    /// Reject configurations the filter cannot give meaningful answers for.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ReferencePoint { lat, lon } = self.reference;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ConfigError::Latitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(ConfigError::Longitude(lon));
        }
        if !self.radius_km.is_finite() || self.radius_km < 0.0 {
            return Err(ConfigError::Radius(self.radius_km));
        }
        if self.search_term.trim().is_empty() {
            return Err(ConfigError::EmptyTerm);
        }
        Ok(())
    }
}

/// Pair up optional credential halves; both must be present and non-blank.
pub fn pair_credentials(a: Option<String>, b: Option<String>) -> Option<(String, String)> {
    match (a, b) {
        (Some(a), Some(b)) if !a.trim().is_empty() && !b.trim().is_empty() => Some((a, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sydney() -> SearchConfig {
        SearchConfig::new(ReferencePoint::new(-33.8688, 151.2093))
    }

    #[test]
    fn test_defaults() {
        let cfg = sydney();
        assert_eq!(cfg.radius_km, 30.0);
        assert_eq!(cfg.search_term, "missing pug");
        assert_eq!(cfg.num_results, 10);
        assert!(cfg.site_filter.is_empty());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_reference() {
        let mut cfg = sydney();
        cfg.reference = ReferencePoint::new(91.0, 0.0);
        assert_eq!(cfg.validate(), Err(ConfigError::Latitude(91.0)));

        cfg.reference = ReferencePoint::new(0.0, -180.5);
        assert_eq!(cfg.validate(), Err(ConfigError::Longitude(-180.5)));

        cfg.reference = ReferencePoint::new(f64::NAN, 0.0);
        assert!(matches!(cfg.validate(), Err(ConfigError::Latitude(_))));
    }

    #[test]
    fn test_radius_bounds() {
        let mut cfg = sydney();
        cfg.radius_km = 0.0;
        assert!(cfg.validate().is_ok());

        cfg.radius_km = -1.0;
        assert_eq!(cfg.validate(), Err(ConfigError::Radius(-1.0)));

        cfg.radius_km = f64::INFINITY;
        assert!(matches!(cfg.validate(), Err(ConfigError::Radius(_))));
    }

    #[test]
    fn test_empty_term() {
        let mut cfg = sydney();
        cfg.search_term = "  ".into();
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyTerm));
    }

    #[test]
    fn test_pair_credentials() {
        assert_eq!(
            pair_credentials(Some("k".into()), Some("cx".into())),
            Some(("k".to_string(), "cx".to_string()))
        );
        assert_eq!(pair_credentials(Some("k".into()), None), None);
        assert_eq!(pair_credentials(Some("".into()), Some("cx".into())), None);
    }
}
