use scenic_matrix_providers::as_the_crow_flies::haversine_meters;

use crate::problem::sample::Sample;

/// Great-circle distance between two coordinates, in kilometers, on a
/// 6371 km sphere.
pub fn haversine_distance_km(from: &Sample, to: &Sample) -> f64 {
    haversine_meters(geo::Point::from(from), geo::Point::from(to)) / 1000.0
}
