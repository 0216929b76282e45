//! Core types for the location subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A named place with WGS-84 coordinates, as read from the locations table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, format_coords(self.lat, self.lon))
    }
}

/// The fixed point proximity filtering is centred on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub lat: f64,
    pub lon: f64,
}

impl ReferencePoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<&Location> for ReferencePoint {
    fn from(loc: &Location) -> Self {
        Self::new(loc.lat, loc.lon)
    }
}

/// A location that passed the radius filter, with its distance from the reference point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyLocation {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub distance_km: f64,
}

/// Which table column a parse problem was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Latitude,
    Longitude,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Latitude => write!(f, "latitude"),
            Self::Longitude => write!(f, "longitude"),
        }
    }
}

/// Errors raised while loading the locations table.
///
/// `line` is the 1-based source line; the header occupies line 1.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Failed to open locations file '{0}'")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Malformed locations table")]
    Csv(#[from] csv::Error),

    #[error("Locations table has no '{0}' column")]
    MissingColumn(Field),

    #[error("Line {line}: missing value for '{field}'")]
    MissingField { line: u64, field: Field },

    #[error("Line {line}: '{value}' is not a valid {field}")]
    InvalidNumber {
        line: u64,
        field: Field,
        value: String,
    },

    #[error("Line {line}: {field} {value} is out of range")]
    OutOfRange { line: u64, field: Field, value: f64 },
}

/// Format coordinates as e.g. "33.8688°S, 151.2093°E".
pub fn format_coords(lat: f64, lon: f64) -> String {
    let ns = if lat >= 0.0 { 'N' } else { 'S' };
    let ew = if lon >= 0.0 { 'E' } else { 'W' };
    format!("{:.4}°{}, {:.4}°{}", lat.abs(), ns, lon.abs(), ew)
}
