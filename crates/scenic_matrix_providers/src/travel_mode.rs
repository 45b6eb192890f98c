use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Upper bound accepted by the photo search collaborator for its radius query.
pub const MAX_SEARCH_RADIUS_KM: f64 = 32.0;

#[derive(Deserialize, Serialize, JsonSchema, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Walking,
    Driving,
}

impl TravelMode {
    /// Rough average speed used for estimates when no travel service is involved.
    pub fn average_speed_kmh(&self) -> f64 {
        match self {
            TravelMode::Walking => 4.0,
            TravelMode::Driving => 50.0,
        }
    }

    /// Radius around the origin worth searching for samples: the distance
    /// reachable within the budget at average speed, capped by the sample
    /// provider's limit.
    pub fn search_radius_km(&self, budget_minutes: f64) -> f64 {
        let radius = budget_minutes.max(0.0) * self.average_speed_kmh() / 60.0;
        radius.min(MAX_SEARCH_RADIUS_KM)
    }
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TravelMode::Walking => "walking",
                TravelMode::Driving => "driving",
            }
        )
    }
}
