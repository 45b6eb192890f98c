use rand::{Rng, SeedableRng, rngs::SmallRng};
use scenic_optimizer::{
    problem::{
        budget::Budget,
        point::{Point, PointIdx},
        sample::Sample,
        travel_cost_matrix::TravelCostMatrix,
    },
    solver::path_evaluation::path_cost,
};

pub fn path(indices: &[usize]) -> Vec<PointIdx> {
    indices.iter().copied().map(PointIdx::new).collect()
}

pub fn budget(minutes: f64) -> Budget {
    Budget::from_minutes(minutes).unwrap()
}

pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

//
//  origin (0) --10-- A (1, value 5)
//  origin (0) --20-- B (2, value 3)
//  origin (0) --15-- C (3, value 8)
//  A --5-- B,  A --25-- C,  B --30-- C
//
pub fn scenario() -> (Vec<Point>, TravelCostMatrix) {
    let points = vec![
        Point::origin(Sample::new(45.0, 6.0)),
        Point::new(45.01, 6.0, 5.0),
        Point::new(45.0, 6.02, 3.0),
        Point::new(45.02, 6.01, 8.0),
    ];

    let matrix = TravelCostMatrix::from_rows(vec![
        vec![0.0, 10.0, 20.0, 15.0],
        vec![10.0, 0.0, 5.0, 25.0],
        vec![20.0, 5.0, 0.0, 30.0],
        vec![15.0, 25.0, 30.0, 0.0],
    ])
    .unwrap();

    (points, matrix)
}

/// Random asymmetric instance with integral values and travel times.
pub fn random_instance(
    rng: &mut impl Rng,
    num_candidates: usize,
) -> (Vec<Point>, TravelCostMatrix) {
    let num_points = num_candidates + 1;

    let points = (0..num_points)
        .map(|index| {
            let value = if index == 0 {
                0.0
            } else {
                rng.random_range(0..=10) as f64
            };
            Point::new(45.0 + index as f64 * 0.01, 6.0, value)
        })
        .collect();

    let rows = (0..num_points)
        .map(|from| {
            (0..num_points)
                .map(|to| {
                    if from == to {
                        0.0
                    } else {
                        rng.random_range(2..=25) as f64
                    }
                })
                .collect()
        })
        .collect();

    (points, TravelCostMatrix::from_rows(rows).unwrap())
}

/// Best score over every ordered subset whose cost satisfies `is_feasible`.
pub fn brute_force_best_score(
    points: &[Point],
    matrix: &TravelCostMatrix,
    is_feasible: impl Fn(f64) -> bool + Copy,
) -> f64 {
    fn visit(
        points: &[Point],
        matrix: &TravelCostMatrix,
        is_feasible: impl Fn(f64) -> bool + Copy,
        path: &mut Vec<PointIdx>,
        best: &mut f64,
    ) {
        for next in (1..points.len()).map(PointIdx::new) {
            if path.contains(&next) {
                continue;
            }

            path.push(next);
            if is_feasible(path_cost(matrix, path)) {
                let score = path.iter().map(|&index| points[index].value()).sum::<f64>();
                *best = best.max(score);
            }
            visit(points, matrix, is_feasible, path, best);
            path.pop();
        }
    }

    let mut best = 0.0;
    visit(points, matrix, is_feasible, &mut Vec::new(), &mut best);
    best
}

/// Samples scattered around `center`, roughly `spread_km` apart at most.
pub fn samples_around(rng: &mut impl Rng, center: Sample, count: usize, spread_km: f64) -> Vec<Sample> {
    let degrees = spread_km / 111.0;
    (0..count)
        .map(|_| {
            Sample::new(
                center.lat + rng.random_range(-degrees..=degrees),
                center.lng + rng.random_range(-degrees..=degrees),
            )
        })
        .collect()
}
