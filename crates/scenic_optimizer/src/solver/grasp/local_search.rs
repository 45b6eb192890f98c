use crate::{
    problem::{
        budget::Budget,
        point::{Point, PointIdx},
        travel_cost_matrix::TravelCostMatrix,
    },
    solver::{
        path_evaluation::{path_cost, path_score},
        score::PathScore,
        solution::Solution,
    },
};

/// Points other than the origin that `path` does not visit, in index order.
pub fn unvisited_points(num_points: usize, path: &[PointIdx]) -> Vec<PointIdx> {
    (1..num_points)
        .map(PointIdx::new)
        .filter(|index| !path.contains(index))
        .collect()
}

/// Swap-based hill climbing.
///
/// Each round swaps a random position of the path with a random unvisited
/// point. The swap is kept only if the path stays strictly under budget and
/// strictly improves, otherwise it is reverted. Returns the number of accepted
/// swaps.
pub fn local_search<R>(
    solution: &mut Solution,
    points: &[Point],
    matrix: &TravelCostMatrix,
    budget: Budget,
    rounds: usize,
    rng: &mut R,
) -> usize
where
    R: rand::Rng,
{
    let mut pool = unvisited_points(points.len(), &solution.path);
    if solution.is_empty() || pool.is_empty() {
        return 0;
    }

    let mut accepted = 0;
    for _ in 0..rounds {
        if local_search_round(solution, &mut pool, points, matrix, budget, rng) {
            accepted += 1;
        }
    }

    accepted
}

fn local_search_round<R>(
    solution: &mut Solution,
    pool: &mut [PointIdx],
    points: &[Point],
    matrix: &TravelCostMatrix,
    budget: Budget,
    rng: &mut R,
) -> bool
where
    R: rand::Rng,
{
    let position = rng.random_range(0..solution.path.len());
    let pool_position = rng.random_range(0..pool.len());

    std::mem::swap(&mut solution.path[position], &mut pool[pool_position]);

    let cost = path_cost(matrix, &solution.path);
    let score = path_score(points, &solution.path);

    if cost < budget.minutes() && PathScore::new(score, cost).is_better_than(&solution.path_score())
    {
        solution.score = score;
        solution.cost = cost;
        true
    } else {
        std::mem::swap(&mut solution.path[position], &mut pool[pool_position]);
        false
    }
}
