use std::fmt::Display;

use serde::Serialize;

use crate::error::InvalidInputError;

/// Travel time ceiling in minutes.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Budget(f64);

impl Budget {
    pub const ZERO: Budget = Budget(0.0);

    pub fn from_minutes(minutes: f64) -> Result<Self, InvalidInputError> {
        if minutes.is_nan() || minutes < 0.0 {
            return Err(InvalidInputError::InvalidBudget(minutes));
        }

        Ok(Budget(minutes))
    }

    pub const fn minutes(&self) -> f64 {
        self.0
    }
}

/// The 25 minute walk offered by default.
impl Default for Budget {
    fn default() -> Self {
        Budget(25.0)
    }
}

impl Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} min", self.0)
    }
}
