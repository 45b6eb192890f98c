use std::time::Instant;

use tracing::{Level, debug, info, instrument};

use crate::{
    clustering::proximity_clustering::cluster_samples,
    error::{InvalidInputError, PlannerError},
    planner::{
        cost_matrix_source::CostMatrixSource, planned_paths::PlannedPaths,
        planner_config::PlannerConfig,
    },
    problem::{point::Point, sample::Sample, travel_cost_matrix::TravelCostMatrix},
    selection::candidate_selector::{build_indexed_points, select_top_candidates},
    solver::{
        exhaustive::ExhaustiveSolver, grasp::grasp_solver::GraspSolver,
        statistics::PlanStatistics,
    },
};

/// Clusters samples into candidates, obtains their travel matrix and runs both
/// solvers over them. Choosing which of the two paths to follow is left to the
/// caller.
pub struct ScenicPathPlanner {
    config: PlannerConfig,
}

impl ScenicPathPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Indexed point array: the origin followed by the best cluster points.
    pub fn candidate_points(&self, origin: Sample, samples: &[Sample]) -> Vec<Point> {
        let clusters = cluster_samples(samples, &self.config.clustering);
        let candidates = select_top_candidates(&clusters, self.config.candidate_count);

        debug!(
            "Selected {} candidates out of {} clusters from {} samples",
            candidates.len(),
            clusters.len(),
            samples.len()
        );

        build_indexed_points(origin, candidates)
    }

    #[instrument(skip_all, level = Level::INFO)]
    pub fn plan<S, R>(
        &self,
        origin: Sample,
        samples: &[Sample],
        source: &S,
        rng: &mut R,
    ) -> Result<PlannedPaths, PlannerError>
    where
        S: CostMatrixSource + ?Sized,
        R: rand::Rng,
    {
        let points = self.candidate_points(origin, samples);

        if points.len() <= 1 {
            info!("No candidates to visit, staying at the origin");
            return Ok(PlannedPaths::empty(points));
        }

        let matrices = source
            .fetch(&points)
            .map_err(PlannerError::MatrixProvider)?;
        let matrix = TravelCostMatrix::from_travel_matrices(&matrices, points.len())?;

        Ok(self.solve(points, &matrix, rng)?)
    }

    /// Runs both solvers over an already indexed point array.
    pub fn solve<R>(
        &self,
        points: Vec<Point>,
        matrix: &TravelCostMatrix,
        rng: &mut R,
    ) -> Result<PlannedPaths, InvalidInputError>
    where
        R: rand::Rng,
    {
        matrix.ensure_covers(points.len())?;

        if let Some((index, point)) = points
            .iter()
            .enumerate()
            .find(|(_, point)| !point.value().is_finite() || point.value() < 0.0)
        {
            return Err(InvalidInputError::InvalidPointValue {
                index,
                value: point.value(),
            });
        }

        if points.len() <= 1 {
            return Ok(PlannedPaths::empty(points));
        }

        let budget = self.config.budget;

        let start = Instant::now();
        let (exhaustive, exhaustive_statistics) =
            ExhaustiveSolver::new(&points, matrix, budget).solve_with_statistics();
        info!(
            "Exhaustive search: score = {}, cost = {:.1}, {} stops in {:?}",
            exhaustive.score,
            exhaustive.cost,
            exhaustive.path.len(),
            start.elapsed()
        );

        let start = Instant::now();
        let (grasp, grasp_statistics) =
            GraspSolver::new(&points, matrix, budget, self.config.grasp)
                .solve_with_statistics(rng);
        info!(
            "GRASP: score = {}, cost = {:.1}, {} stops in {:?}",
            grasp.score,
            grasp.cost,
            grasp.path.len(),
            start.elapsed()
        );

        Ok(PlannedPaths {
            points,
            exhaustive,
            grasp,
            statistics: PlanStatistics {
                exhaustive: exhaustive_statistics,
                grasp: grasp_statistics,
            },
        })
    }
}
