use crate::core::{CostEstimator, Result};
use crate::utils::error::PlanError;
use crate::utils::validation::is_strictly_positive;

/// Estimates raw-material cost as `area * rate`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawMaterialEstimator;

impl RawMaterialEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl CostEstimator for RawMaterialEstimator {
    fn estimate(&self, area: f64, rate: f64) -> Result<f64> {
        if !is_strictly_positive(area) || !is_strictly_positive(rate) {
            tracing::warn!("Rejected cost estimate: area={}, rate={}", area, rate);
            return Err(PlanError::InvalidArgument { area, rate });
        }
        Ok(area * rate)
    }
}
