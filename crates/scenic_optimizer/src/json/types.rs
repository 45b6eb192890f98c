use scenic_matrix_providers::{
    travel_matrix_provider::TravelMatrixProvider, travel_mode::TravelMode,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    clustering::proximity_clustering::ClusteringParams,
    error::InvalidInputError,
    planner::{planned_paths::PlannedPaths, planner_config::PlannerConfig},
    problem::{budget::Budget, point::Point, sample::Sample},
    solver::{grasp::grasp_params::GraspParams, solution::Solution, statistics::PlanStatistics},
};

/// A planning request. Every setting is optional and falls back to
/// [`PlannerConfig::default`].
#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "PlanningRequest")]
pub struct JsonPlanningRequest {
    pub origin: Sample,
    pub samples: Vec<Sample>,
    pub budget_minutes: Option<f64>,
    pub travel_mode: Option<TravelMode>,
    pub candidate_count: Option<usize>,
    pub clustering: Option<ClusteringParams>,
    pub grasp: Option<GraspParams>,

    /// Where travel times come from. Defaults to an as-the-crow-flies
    /// estimate at the travel mode's average speed. Custom matrices must be
    /// aligned with the candidate points, origin first.
    pub travel_matrix_provider: Option<TravelMatrixProvider>,
}

impl JsonPlanningRequest {
    pub fn planner_config(&self) -> Result<PlannerConfig, InvalidInputError> {
        let defaults = PlannerConfig::default();

        Ok(PlannerConfig {
            candidate_count: self.candidate_count.unwrap_or(defaults.candidate_count),
            budget: match self.budget_minutes {
                Some(minutes) => Budget::from_minutes(minutes)?,
                None => defaults.budget,
            },
            travel_mode: self.travel_mode.unwrap_or(defaults.travel_mode),
            clustering: self.clustering.clone().unwrap_or(defaults.clustering),
            grasp: self.grasp.unwrap_or(defaults.grasp),
        })
    }

    pub fn travel_matrix_provider(&self, travel_mode: TravelMode) -> TravelMatrixProvider {
        self.travel_matrix_provider
            .clone()
            .unwrap_or_else(|| TravelMatrixProvider::for_travel_mode(travel_mode))
    }
}

#[derive(Serialize)]
#[serde(rename = "PlannedPaths")]
pub struct JsonPlannedPaths {
    pub points: Vec<Point>,
    pub exhaustive: JsonSolution,
    pub grasp: JsonSolution,
    pub statistics: PlanStatistics,
}

#[derive(Serialize)]
#[serde(rename = "Solution")]
pub struct JsonSolution {
    /// Indices into `points`, origin excluded.
    pub path: Vec<usize>,
    pub score: f64,
    /// Minutes.
    pub cost: f64,
    /// Route coordinates, origin first.
    pub coordinates: Vec<Sample>,
}

impl JsonSolution {
    fn from_planned(solution: &Solution, planned: &PlannedPaths) -> Self {
        JsonSolution {
            path: solution.path.iter().map(|index| index.get()).collect(),
            score: solution.score,
            cost: solution.cost,
            coordinates: planned.route(solution).coordinates,
        }
    }
}

impl From<&PlannedPaths> for JsonPlannedPaths {
    fn from(planned: &PlannedPaths) -> Self {
        JsonPlannedPaths {
            points: planned.points.clone(),
            exhaustive: JsonSolution::from_planned(&planned.exhaustive, planned),
            grasp: JsonSolution::from_planned(&planned.grasp, planned),
            statistics: planned.statistics,
        }
    }
}
