use scenic_matrix_providers::{
    travel_matrices::TravelMatrices, travel_matrix_provider::TravelMatrixProvider,
    travel_mode::TravelMode,
};

use crate::problem::point::Point;

/// Supplies the travel times between every pair of an ordered point array,
/// aligned by index.
pub trait CostMatrixSource {
    fn fetch(&self, points: &[Point]) -> anyhow::Result<TravelMatrices>;
}

impl<F> CostMatrixSource for F
where
    F: Fn(&[Point]) -> anyhow::Result<TravelMatrices>,
{
    fn fetch(&self, points: &[Point]) -> anyhow::Result<TravelMatrices> {
        self(points)
    }
}

/// Fetches matrices from a fixed [`TravelMatrixProvider`].
pub struct ProviderMatrixSource {
    provider: TravelMatrixProvider,
}

impl ProviderMatrixSource {
    pub fn new(provider: TravelMatrixProvider) -> Self {
        Self { provider }
    }

    pub fn for_travel_mode(travel_mode: TravelMode) -> Self {
        Self::new(TravelMatrixProvider::for_travel_mode(travel_mode))
    }
}

impl CostMatrixSource for ProviderMatrixSource {
    fn fetch(&self, points: &[Point]) -> anyhow::Result<TravelMatrices> {
        Ok(self.provider.travel_matrices(points))
    }
}
