use crate::problem::{
    point::{ORIGIN, Point, PointIdx},
    travel_cost_matrix::TravelCostMatrix,
};

/// Travel time from the origin through every point of `path`, in order.
pub fn path_cost(matrix: &TravelCostMatrix, path: &[PointIdx]) -> f64 {
    let mut last = ORIGIN;
    let mut cost = 0.0;
    for &next in path {
        cost += matrix.travel_time(last, next);
        last = next;
    }
    cost
}

pub fn path_score(points: &[Point], path: &[PointIdx]) -> f64 {
    path.iter().map(|&index| points[index].value()).sum()
}
