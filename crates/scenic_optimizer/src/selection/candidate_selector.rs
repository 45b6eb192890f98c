use std::iter;

use crate::problem::{point::Point, sample::Sample};

/// Candidates kept per run. With the origin this makes a 10 x 10 travel matrix,
/// the largest request the travel time service accepts within its rate limit
/// of 100 elements per 10 seconds.
pub const DEFAULT_CANDIDATE_COUNT: usize = 9;

/// Keeps the `count` highest-valued points; points of equal value keep their
/// original relative order.
pub fn select_top_candidates(clusters: &[Point], count: usize) -> Vec<Point> {
    let mut ranked = clusters.to_vec();
    ranked.sort_by(|a, b| b.value().total_cmp(&a.value()));
    ranked.truncate(count);
    ranked
}

/// Builds the indexed point array shared by the solvers: origin at index 0,
/// candidates after it.
pub fn build_indexed_points(origin: Sample, candidates: Vec<Point>) -> Vec<Point> {
    iter::once(Point::origin(origin)).chain(candidates).collect()
}
