use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GraspParams {
    /// Number of construction and local search runs.
    pub max_iterations: usize,
    /// Unvisited points sampled at each construction step.
    pub num_candidates: usize,
    /// Swap proposals tried by the local search.
    pub local_search_size: usize,
}

impl Default for GraspParams {
    fn default() -> Self {
        GraspParams {
            max_iterations: 100,
            num_candidates: 20,
            local_search_size: 20,
        }
    }
}
