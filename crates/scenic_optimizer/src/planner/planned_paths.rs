use serde::Serialize;

use crate::{
    problem::{point::Point, sample::Sample},
    solver::{solution::Solution, statistics::PlanStatistics},
};

/// Result of a planning run: the indexed points and the path found by each
/// solver over them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedPaths {
    /// Origin first, then the selected candidates.
    pub points: Vec<Point>,
    pub exhaustive: Solution,
    pub grasp: Solution,
    pub statistics: PlanStatistics,
}

/// A path as handed to a map renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedRoute {
    /// Starts at the origin.
    pub coordinates: Vec<Sample>,
    pub score: f64,
    pub cost: f64,
}

impl PlannedPaths {
    /// Both solvers stay at the origin.
    pub fn empty(points: Vec<Point>) -> Self {
        PlannedPaths {
            points,
            exhaustive: Solution::empty(),
            grasp: Solution::empty(),
            statistics: PlanStatistics::default(),
        }
    }

    pub fn origin(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn route(&self, solution: &Solution) -> PlannedRoute {
        let coordinates = self
            .origin()
            .into_iter()
            .chain(solution.path.iter().map(|&index| &self.points[index]))
            .map(Point::coordinates)
            .collect();

        PlannedRoute {
            coordinates,
            score: solution.score,
            cost: solution.cost,
        }
    }
}
