use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::problem::{
    budget::Budget,
    point::{Point, PointIdx},
    sample::Sample,
    travel_cost_matrix::TravelCostMatrix,
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
        Point::origin(Sample::new(0.0, 0.0)),
        Point::new(0.0, 0.0, 5.0),
        Point::new(0.0, 1.0, 3.0),
        Point::new(1.0, 0.0, 8.0),
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

/// Random directed instance with `num_candidates` points after the origin.
pub fn random_instance(rng: &mut impl Rng, num_candidates: usize) -> (Vec<Point>, TravelCostMatrix) {
    let num_points = num_candidates + 1;
    let points = (0..num_points)
        .map(|index| {
            let value = if index == 0 {
                0.0
            } else {
                rng.random_range(1..=10) as f64
            };
            Point::new(index as f64, index as f64, value)
        })
        .collect();

    let rows = (0..num_points)
        .map(|from| {
            (0..num_points)
                .map(|to| {
                    if from == to {
                        0.0
                    } else {
                        rng.random_range(1..=20) as f64
                    }
                })
                .collect()
        })
        .collect();

    (points, TravelCostMatrix::from_rows(rows).unwrap())
}
