use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::{
    clustering::geo_distance::haversine_distance_km,
    problem::{point::Point, sample::Sample},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ClusteringParams {
    /// Samples closer than this to a cluster center belong to it.
    pub radius_km: f64,
}

impl Default for ClusteringParams {
    fn default() -> Self {
        Self { radius_km: 0.5 }
    }
}

/// Greedily groups samples into weighted cluster points.
///
/// Each round picks the remaining sample with the most remaining neighbors
/// within `radius_km` (first one wins on ties), emits a point at its
/// coordinates weighted by the neighborhood size, and removes the whole
/// neighborhood from the pool. A sample always belongs to its own
/// neighborhood, so every round removes at least one sample.
///
/// Cubic in the worst case.
#[instrument(skip_all, level = Level::DEBUG)]
pub fn cluster_samples(samples: &[Sample], params: &ClusteringParams) -> Vec<Point> {
    let mut remaining = samples.to_vec();
    let mut clusters = Vec::new();

    while !remaining.is_empty() {
        let mut center = 0;
        let mut neighborhood: Vec<usize> = Vec::new();

        for (index, candidate) in remaining.iter().enumerate() {
            let neighbors = neighbors_of(&remaining, index, candidate, params.radius_km);
            if neighbors.len() > neighborhood.len() {
                center = index;
                neighborhood = neighbors;
            }
        }

        clusters.push(Point::weighted(
            remaining[center],
            neighborhood.len() as f64,
        ));

        let mut in_neighborhood = vec![false; remaining.len()];
        for &index in &neighborhood {
            in_neighborhood[index] = true;
        }

        let mut flags = in_neighborhood.into_iter();
        remaining.retain(|_| !flags.next().unwrap_or(false));
    }

    debug!(
        "Grouped {} samples into {} clusters",
        samples.len(),
        clusters.len()
    );

    clusters
}

fn neighbors_of(samples: &[Sample], index: usize, center: &Sample, radius_km: f64) -> Vec<usize> {
    samples
        .iter()
        .enumerate()
        .filter(|&(other, sample)| {
            other == index || haversine_distance_km(center, sample) < radius_km
        })
        .map(|(other, _)| other)
        .collect()
}
