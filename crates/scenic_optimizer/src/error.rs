use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InvalidInputError {
    #[error("travel matrix covers {actual} points but {expected} points are planned")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("travel matrix row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("travel matrix with {cells} cells is not square")]
    NotSquare { cells: usize },

    #[error("travel time from {from} to {to} is missing")]
    MissingEntry { from: usize, to: usize },

    #[error("travel time from {from} to {to} is negative ({value})")]
    NegativeTravelTime { from: usize, to: usize, value: f64 },

    #[error("travel time from {from} to {to} is not finite")]
    NonFiniteTravelTime { from: usize, to: usize },

    #[error("budget must be a non-negative number of minutes, got {0}")]
    InvalidBudget(f64),

    #[error("point {index} has an invalid value {value}")]
    InvalidPointValue { index: usize, value: f64 },
}

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error(transparent)]
    MatrixProvider(anyhow::Error),
}
