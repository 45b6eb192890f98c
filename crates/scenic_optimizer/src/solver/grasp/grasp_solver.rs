use tracing::{Level, debug, instrument};

use crate::{
    problem::{budget::Budget, point::Point, travel_cost_matrix::TravelCostMatrix},
    solver::{
        grasp::{
            construction::construct_path, grasp_params::GraspParams, local_search::local_search,
        },
        solution::Solution,
        statistics::GraspStatistics,
    },
};

/// Greedy Randomized Adaptive Search Procedure.
///
/// Runs `max_iterations` independent construction and local search passes and
/// keeps the best result under the score-then-cost order. Every path it keeps
/// costs strictly less than the budget.
pub struct GraspSolver<'a> {
    points: &'a [Point],
    matrix: &'a TravelCostMatrix,
    budget: Budget,
    params: GraspParams,
}

impl<'a> GraspSolver<'a> {
    pub fn new(
        points: &'a [Point],
        matrix: &'a TravelCostMatrix,
        budget: Budget,
        params: GraspParams,
    ) -> Self {
        Self {
            points,
            matrix,
            budget,
            params,
        }
    }

    pub fn solve<R>(&self, rng: &mut R) -> Solution
    where
        R: rand::Rng,
    {
        self.solve_with_statistics(rng).0
    }

    #[instrument(skip_all, level = Level::DEBUG)]
    pub fn solve_with_statistics<R>(&self, rng: &mut R) -> (Solution, GraspStatistics)
    where
        R: rand::Rng,
    {
        let mut best = Solution::empty();
        let mut statistics = GraspStatistics::default();

        if self.points.len() <= 1 {
            return (best, statistics);
        }

        for iteration in 0..self.params.max_iterations {
            statistics.iterations += 1;

            let mut candidate = construct_path(
                self.points,
                self.matrix,
                self.budget,
                self.params.num_candidates,
                rng,
            );

            statistics.accepted_swaps += local_search(
                &mut candidate,
                self.points,
                self.matrix,
                self.budget,
                self.params.local_search_size,
                rng,
            );

            if candidate.is_better_than(&best) {
                debug!(
                    "Iteration {}: new best score = {}, cost = {}",
                    iteration, candidate.score, candidate.cost
                );
                statistics.improvements += 1;
                best = candidate;
            }
        }

        (best, statistics)
    }
}
