pub mod cost_matrix_source;
pub mod planned_paths;
pub mod planner_config;
pub mod scenic_path_planner;
