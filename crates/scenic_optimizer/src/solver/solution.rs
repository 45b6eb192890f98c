use serde::Serialize;

use crate::{
    problem::{
        point::{Point, PointIdx},
        travel_cost_matrix::TravelCostMatrix,
    },
    solver::{
        path_evaluation::{path_cost, path_score},
        score::PathScore,
    },
};

/// An ordered visiting sequence starting after the origin, with its collected
/// score and travel cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub path: Vec<PointIdx>,
    pub score: f64,
    pub cost: f64,
}

impl Solution {
    /// Staying at the origin, always feasible.
    pub fn empty() -> Self {
        Solution {
            path: Vec::new(),
            score: 0.0,
            cost: 0.0,
        }
    }

    pub fn evaluate(path: Vec<PointIdx>, points: &[Point], matrix: &TravelCostMatrix) -> Self {
        let score = path_score(points, &path);
        let cost = path_cost(matrix, &path);
        Solution { path, score, cost }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn path_score(&self) -> PathScore {
        PathScore::new(self.score, self.cost)
    }

    pub fn is_better_than(&self, other: &Solution) -> bool {
        self.path_score().is_better_than(&other.path_score())
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::empty()
    }
}
