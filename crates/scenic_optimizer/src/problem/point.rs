use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{define_index_newtype, problem::sample::Sample};

define_index_newtype!(PointIdx, Point);

/// The starting location always sits at index 0 and never contributes score.
pub const ORIGIN: PointIdx = PointIdx::new(0);

/// A weighted location the path may visit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    lat: f64,
    lng: f64,
    value: f64,
}

impl Point {
    pub const fn new(lat: f64, lng: f64, value: f64) -> Self {
        Self { lat, lng, value }
    }

    pub const fn origin(at: Sample) -> Self {
        Self::new(at.lat, at.lng, 0.0)
    }

    pub const fn weighted(at: Sample, value: f64) -> Self {
        Self::new(at.lat, at.lng, value)
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn coordinates(&self) -> Sample {
        Sample::new(self.lat, self.lng)
    }
}

impl From<&Point> for geo::Point<f64> {
    fn from(point: &Point) -> Self {
        geo::Point::new(point.lng, point.lat)
    }
}
