use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Travel durations in minutes between every pair of points, stored as a flat
/// row-major vector: `index = from * num_locations + to`.
///
/// A `None` cell means the provider could not compute that leg.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct TravelMatrices {
    pub times: Vec<Option<f64>>,
}

impl TravelMatrices {
    pub fn from_rows(rows: Vec<Vec<Option<f64>>>) -> Self {
        TravelMatrices {
            times: rows.into_iter().flatten().collect(),
        }
    }

    /// Number of locations if the flat vector is square, `None` otherwise.
    pub fn num_locations(&self) -> Option<usize> {
        let num_locations = self.times.len().isqrt();
        if num_locations * num_locations == self.times.len() {
            Some(num_locations)
        } else {
            None
        }
    }

    pub fn time(&self, from: usize, to: usize) -> Option<f64> {
        let num_locations = self.num_locations()?;
        if from >= num_locations || to >= num_locations {
            return None;
        }

        self.times[from * num_locations + to]
    }
}
