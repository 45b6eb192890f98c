use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExhaustiveStatistics {
    /// Search nodes entered, including the root and pruned nodes.
    pub explored_nodes: u64,
    /// Nodes abandoned because their cost exceeded the budget.
    pub pruned_nodes: u64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraspStatistics {
    pub iterations: usize,
    /// Iterations whose candidate replaced the best solution.
    pub improvements: usize,
    pub accepted_swaps: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanStatistics {
    pub exhaustive: ExhaustiveStatistics,
    pub grasp: GraspStatistics,
}
