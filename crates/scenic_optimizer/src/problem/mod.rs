pub mod budget;
pub mod point;
pub mod sample;
pub mod travel_cost_matrix;
