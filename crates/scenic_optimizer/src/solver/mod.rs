pub mod exhaustive;
pub mod grasp;
pub mod path_evaluation;
pub mod score;
pub mod solution;
pub mod statistics;
