pub mod as_the_crow_flies;
pub mod travel_matrices;
pub mod travel_matrix_provider;
pub mod travel_mode;
