//! Proximity filter over the loaded locations.
//!
//! Distances are geodesics on the WGS-84 ellipsoid (Karney's method), in km.
//! The radius bound is inclusive.

use super::types::{Location, NearbyLocation, ReferencePoint};
use geo::{GeodesicDistance, Point};

/// Geodesic distance in kilometres between the reference point and a coordinate pair.
pub fn distance_km(reference: &ReferencePoint, lat: f64, lon: f64) -> f64 {
    let from = Point::new(reference.lon, reference.lat);
    let to = Point::new(lon, lat);
    from.geodesic_distance(&to) / 1000.0
}

/// Locations within `radius_km` of `reference`, with their distances, in input order.
pub fn locations_within_radius(
    reference: &ReferencePoint,
    locations: &[Location],
    radius_km: f64,
) -> Vec<NearbyLocation> {
    let nearby: Vec<NearbyLocation> = locations
        .iter()
        .filter_map(|loc| {
            let d = distance_km(reference, loc.lat, loc.lon);
            log::debug!("{} is {:.2} km away", loc.name, d);
            (d <= radius_km).then(|| NearbyLocation {
                name: loc.name.clone(),
                lat: loc.lat,
                lon: loc.lon,
                distance_km: d,
            })
        })
        .collect();

    log::info!(
        "{} of {} locations within {} km",
        nearby.len(),
        locations.len(),
        radius_km
    );
    nearby
}

/// Names of the locations within `radius_km` of `reference`, in input order.
pub fn filter_within_radius(
    reference: &ReferencePoint,
    locations: &[Location],
    radius_km: f64,
) -> Vec<String> {
    locations_within_radius(reference, locations, radius_km)
        .into_iter()
        .map(|n| n.name)
        .collect()
}
