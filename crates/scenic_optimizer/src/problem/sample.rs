use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A raw geotagged observation, e.g. where a photo was taken.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Sample {
    pub lat: f64,
    pub lng: f64,
}

impl Sample {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<&Sample> for geo::Point<f64> {
    fn from(sample: &Sample) -> Self {
        geo::Point::new(sample.lng, sample.lat)
    }
}
