use scenic_matrix_providers::travel_mode::TravelMode;

use crate::{
    clustering::proximity_clustering::ClusteringParams,
    problem::budget::Budget,
    selection::candidate_selector::DEFAULT_CANDIDATE_COUNT,
    solver::grasp::grasp_params::GraspParams,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Candidates kept after clustering, not counting the origin.
    pub candidate_count: usize,
    pub budget: Budget,
    /// Only decides which travel matrix is requested.
    pub travel_mode: TravelMode,
    pub clustering: ClusteringParams,
    pub grasp: GraspParams,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            candidate_count: DEFAULT_CANDIDATE_COUNT,
            budget: Budget::default(),
            travel_mode: TravelMode::default(),
            clustering: ClusteringParams::default(),
            grasp: GraspParams::default(),
        }
    }
}

impl PlannerConfig {
    /// Radius around the origin in which samples are worth collecting.
    pub fn search_radius_km(&self) -> f64 {
        self.travel_mode.search_radius_km(self.budget.minutes())
    }
}
