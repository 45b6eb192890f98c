pub mod construction;
pub mod grasp_params;
pub mod grasp_solver;
pub mod local_search;
