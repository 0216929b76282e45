//! Location subsystem for petscout.
//!
//! Loads named places from a CSV table and filters them by geodesic distance
//! from a reference point.

pub mod filter;
pub mod loader;
pub mod types;

pub use filter::{distance_km, filter_within_radius, locations_within_radius};
pub use loader::{load_from_path, load_from_reader};
pub use types::{format_coords, Field, Location, LocationError, NearbyLocation, ReferencePoint};
