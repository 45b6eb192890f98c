use rand::seq::SliceRandom;

use crate::{
    problem::{
        budget::Budget,
        point::{Point, PointIdx},
        travel_cost_matrix::TravelCostMatrix,
    },
    solver::{path_evaluation::path_cost, score::PathScore, solution::Solution},
};

/// Greedy randomized construction.
///
/// Starts from a single random point and repeatedly prepends the best of up to
/// `num_candidates` randomly sampled unvisited points, as long as the path stays
/// strictly under budget. Growth stops as soon as no sampled point is feasible.
///
/// Yields an empty path when there is nothing besides the origin.
pub fn construct_path<R>(
    points: &[Point],
    matrix: &TravelCostMatrix,
    budget: Budget,
    num_candidates: usize,
    rng: &mut R,
) -> Solution
where
    R: rand::Rng,
{
    if points.len() < 2 {
        return Solution::empty();
    }

    let start = PointIdx::new(rng.random_range(1..points.len()));
    let mut solution = Solution::evaluate(vec![start], points, matrix);

    if solution.cost >= budget.minutes() {
        return Solution::empty();
    }

    let mut pool: Vec<PointIdx> = (1..points.len())
        .map(PointIdx::new)
        .filter(|&index| index != start)
        .collect();

    let mut tentative = Vec::with_capacity(points.len());

    while !pool.is_empty() && solution.cost < budget.minutes() {
        let (sampled, _) = pool.partial_shuffle(rng, num_candidates);

        let mut best: Option<(PointIdx, PathScore)> = None;

        for &candidate in sampled.iter() {
            tentative.clear();
            tentative.push(candidate);
            tentative.extend_from_slice(&solution.path);

            let cost = path_cost(matrix, &tentative);
            if cost >= budget.minutes() {
                continue;
            }

            let score = PathScore::new(solution.score + points[candidate].value(), cost);
            if best.is_none_or(|(_, best_score)| score.is_better_than(&best_score)) {
                best = Some((candidate, score));
            }
        }

        let Some((chosen, score)) = best else {
            break;
        };

        if let Some(position) = pool.iter().position(|&index| index == chosen) {
            pool.swap_remove(position);
        }

        solution.path.insert(0, chosen);
        solution.score = score.score;
        solution.cost = score.cost;
    }

    solution
}
