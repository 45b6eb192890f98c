mod exhaustive_tests;
mod grasp_tests;
