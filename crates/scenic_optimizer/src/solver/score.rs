use std::cmp::Ordering;

use serde::Serialize;

/// Score collected along a path together with its travel cost.
///
/// Ordered so that greater is better: a higher score wins, and on equal score
/// the lower cost wins.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct PathScore {
    pub score: f64,
    pub cost: f64,
}

impl PathScore {
    pub const ZERO: PathScore = PathScore {
        score: 0.0,
        cost: 0.0,
    };

    pub fn new(score: f64, cost: f64) -> Self {
        PathScore { score, cost }
    }

    /// Strict improvement; an exact tie keeps the incumbent.
    pub fn is_better_than(&self, other: &PathScore) -> bool {
        self > other
    }
}

impl Eq for PathScore {}

impl Ord for PathScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.cost.total_cmp(&self.cost))
    }
}

impl PartialOrd for PathScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
