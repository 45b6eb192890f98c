use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    as_the_crow_flies::as_the_crow_flies_matrices, travel_matrices::TravelMatrices,
    travel_mode::TravelMode,
};

#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum TravelMatrixProvider {
    /// Great-circle estimate at a constant average speed.
    AsTheCrowFlies { speed_kmh: f64 },

    /// Matrices computed by an external travel service and handed over as-is.
    Custom { matrices: TravelMatrices },
}

impl TravelMatrixProvider {
    pub fn for_travel_mode(travel_mode: TravelMode) -> Self {
        TravelMatrixProvider::AsTheCrowFlies {
            speed_kmh: travel_mode.average_speed_kmh(),
        }
    }

    /// Travel times between every pair of `points`, aligned by index.
    ///
    /// Custom matrices are returned as given, whatever the points.
    pub fn travel_matrices<P>(&self, points: &[P]) -> TravelMatrices
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        match self {
            TravelMatrixProvider::AsTheCrowFlies { speed_kmh } => {
                debug!(
                    "Estimating travel times for {} points at {speed_kmh} km/h",
                    points.len()
                );
                as_the_crow_flies_matrices(points, *speed_kmh)
            }
            TravelMatrixProvider::Custom { matrices } => {
                debug!(
                    "Using custom matrices covering {:?} locations",
                    matrices.num_locations()
                );
                matrices.clone()
            }
        }
    }
}
