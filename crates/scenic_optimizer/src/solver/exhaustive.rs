use tracing::{Level, debug, instrument};

use crate::{
    problem::{
        budget::Budget,
        point::{ORIGIN, Point, PointIdx},
        travel_cost_matrix::TravelCostMatrix,
    },
    solver::{score::PathScore, solution::Solution, statistics::ExhaustiveStatistics},
};

/// Depth-first branch-and-bound over every visiting order of every subset of
/// the candidates.
///
/// A branch is abandoned as soon as its cost exceeds the budget, since travel
/// times are non-negative. Every prefix is a valid path, so each node is
/// compared against the best so far. Children are explored in index order and
/// exact ties keep the first path found, which makes the result deterministic.
///
/// Factorial in the number of candidates: meant for ten points or fewer.
pub struct ExhaustiveSolver<'a> {
    points: &'a [Point],
    matrix: &'a TravelCostMatrix,
    budget: Budget,
}

struct SearchState {
    visited: Vec<bool>,
    path: Vec<PointIdx>,
    best: Solution,
    statistics: ExhaustiveStatistics,
}

impl<'a> ExhaustiveSolver<'a> {
    pub fn new(points: &'a [Point], matrix: &'a TravelCostMatrix, budget: Budget) -> Self {
        Self {
            points,
            matrix,
            budget,
        }
    }

    pub fn solve(&self) -> Solution {
        self.solve_with_statistics().0
    }

    #[instrument(skip_all, level = Level::DEBUG)]
    pub fn solve_with_statistics(&self) -> (Solution, ExhaustiveStatistics) {
        let num_points = self.points.len();

        let mut state = SearchState {
            visited: vec![false; num_points],
            path: Vec::with_capacity(num_points),
            best: Solution::empty(),
            statistics: ExhaustiveStatistics::default(),
        };

        if num_points > 0 {
            state.visited[ORIGIN.get()] = true;
            self.explore(&mut state, ORIGIN, 0.0, 0.0);
        }

        debug!(
            "Exhaustive search explored {} nodes ({} pruned), best score = {}, cost = {}",
            state.statistics.explored_nodes,
            state.statistics.pruned_nodes,
            state.best.score,
            state.best.cost
        );

        (state.best, state.statistics)
    }

    fn explore(&self, state: &mut SearchState, last: PointIdx, cost: f64, score: f64) {
        state.statistics.explored_nodes += 1;

        if cost > self.budget.minutes() {
            state.statistics.pruned_nodes += 1;
            return;
        }

        if PathScore::new(score, cost).is_better_than(&state.best.path_score()) {
            state.best = Solution {
                path: state.path.clone(),
                score,
                cost,
            };
        }

        for next in 1..self.points.len() {
            if state.visited[next] {
                continue;
            }

            let next = PointIdx::new(next);

            state.visited[next.get()] = true;
            state.path.push(next);

            self.explore(
                state,
                next,
                cost + self.matrix.travel_time(last, next),
                score + self.points[next].value(),
            );

            state.path.pop();
            state.visited[next.get()] = false;
        }
    }
}
