pub mod clustering;
pub mod error;
pub mod json;
pub mod planner;
pub mod problem;
pub mod selection;
pub mod solver;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
