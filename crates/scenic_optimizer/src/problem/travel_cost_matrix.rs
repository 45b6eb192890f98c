use scenic_matrix_providers::travel_matrices::TravelMatrices;

use crate::{error::InvalidInputError, problem::point::PointIdx};

pub type Time = f64;

/// Directed travel times in minutes between the planned points.
///
/// Stored flat: `index = from * num_points + to`. Every off-diagonal cell must
/// be present, finite and non-negative; a missing diagonal cell is read as zero
/// since no path ever stays in place.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelCostMatrix {
    times: Vec<Time>,
    num_points: usize,
}

fn validate_cell(from: usize, to: usize, time: Option<Time>) -> Result<Time, InvalidInputError> {
    match time {
        None if from == to => Ok(0.0),
        None => Err(InvalidInputError::MissingEntry { from, to }),
        Some(time) if !time.is_finite() => {
            Err(InvalidInputError::NonFiniteTravelTime { from, to })
        }
        Some(time) if time < 0.0 => Err(InvalidInputError::NegativeTravelTime {
            from,
            to,
            value: time,
        }),
        Some(time) => Ok(time),
    }
}

impl TravelCostMatrix {
    pub fn from_rows(rows: Vec<Vec<Time>>) -> Result<Self, InvalidInputError> {
        Self::from_optional_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect(),
        )
    }

    pub fn from_optional_rows(rows: Vec<Vec<Option<Time>>>) -> Result<Self, InvalidInputError> {
        let num_points = rows.len();
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != num_points)
        {
            return Err(InvalidInputError::RaggedRow {
                row,
                expected: num_points,
                actual: cells.len(),
            });
        }

        Self::from_flat(rows.into_iter().flatten().collect(), num_points)
    }

    /// Converts the provider's flat matrices, checking they were computed for
    /// exactly `num_points` points.
    pub fn from_travel_matrices(
        matrices: &TravelMatrices,
        num_points: usize,
    ) -> Result<Self, InvalidInputError> {
        let actual = matrices
            .num_locations()
            .ok_or(InvalidInputError::NotSquare {
                cells: matrices.times.len(),
            })?;

        if actual != num_points {
            return Err(InvalidInputError::DimensionMismatch {
                expected: num_points,
                actual,
            });
        }

        Self::from_flat(matrices.times.clone(), num_points)
    }

    fn from_flat(cells: Vec<Option<Time>>, num_points: usize) -> Result<Self, InvalidInputError> {
        let times = cells
            .into_iter()
            .enumerate()
            .map(|(index, time)| validate_cell(index / num_points, index % num_points, time))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { times, num_points })
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn ensure_covers(&self, num_points: usize) -> Result<(), InvalidInputError> {
        if self.num_points != num_points {
            return Err(InvalidInputError::DimensionMismatch {
                expected: num_points,
                actual: self.num_points,
            });
        }

        Ok(())
    }

    #[inline(always)]
    pub fn travel_time(&self, from: PointIdx, to: PointIdx) -> Time {
        if from == to {
            return 0.0;
        }

        self.times[from.get() * self.num_points + to.get()]
    }
}
