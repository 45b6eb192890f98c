use geo::{Distance, HaversineMeasure};

use crate::travel_matrices::TravelMatrices;

pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

const EARTH: HaversineMeasure = HaversineMeasure::new(EARTH_RADIUS_METERS);

/// Haversine distance in meters on a sphere of [`EARTH_RADIUS_METERS`].
pub fn haversine_meters(from: geo_types::Point, to: geo_types::Point) -> f64 {
    EARTH.distance(from, to)
}

/// Estimates travel times in minutes from great-circle distances at a constant speed.
pub fn as_the_crow_flies_matrices<P>(points: &[P], speed_kmh: f64) -> TravelMatrices
where
    for<'a> &'a P: Into<geo_types::Point>,
{
    let points: Vec<geo_types::Point> = points.iter().map(|p| p.into()).collect();
    let meters_per_minute = speed_kmh * 1000.0 / 60.0;

    let mut times = Vec::with_capacity(points.len() * points.len());
    for from in &points {
        for to in &points {
            times.push(Some(haversine_meters(*from, *to) / meters_per_minute));
        }
    }

    TravelMatrices { times }
}
