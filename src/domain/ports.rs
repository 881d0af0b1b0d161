use crate::domain::model::{BuildingDescriptor, PlanBlock, PlanDescription, PlanningOutcome};
use crate::utils::error::Result;
use std::sync::Arc;

pub trait PlanProvider: Send + Sync {
    fn produce_plan(&self, name: &str, area: f64) -> PlanDescription;
}

pub trait CostEstimator: Send + Sync {
    fn estimate(&self, area: f64, rate: f64) -> Result<f64>;
}

pub trait PlanSink: Send + Sync {
    fn emit(&self, block: &PlanBlock) -> Result<()>;
}

/// The interface clients are written against.
pub trait ArchitecturalPlanning: Send + Sync {
    fn make_plan(&self, name: &str, area: f64) -> Result<PlanningOutcome>;

    fn make_plan_for(&self, building: &BuildingDescriptor) -> Result<PlanningOutcome> {
        self.make_plan(&building.name, building.area)
    }
}

impl<T: PlanProvider + ?Sized> PlanProvider for Arc<T> {
    fn produce_plan(&self, name: &str, area: f64) -> PlanDescription {
        (**self).produce_plan(name, area)
    }
}

impl<T: PlanProvider + ?Sized> PlanProvider for &T {
    fn produce_plan(&self, name: &str, area: f64) -> PlanDescription {
        (**self).produce_plan(name, area)
    }
}

impl<T: CostEstimator + ?Sized> CostEstimator for Arc<T> {
    fn estimate(&self, area: f64, rate: f64) -> Result<f64> {
        (**self).estimate(area, rate)
    }
}

impl<T: CostEstimator + ?Sized> CostEstimator for &T {
    fn estimate(&self, area: f64, rate: f64) -> Result<f64> {
        (**self).estimate(area, rate)
    }
}

impl<T: PlanSink + ?Sized> PlanSink for Arc<T> {
    fn emit(&self, block: &PlanBlock) -> Result<()> {
        (**self).emit(block)
    }
}

impl<T: PlanSink + ?Sized> PlanSink for &T {
    fn emit(&self, block: &PlanBlock) -> Result<()> {
        (**self).emit(block)
    }
}

impl<T: ArchitecturalPlanning + ?Sized> ArchitecturalPlanning for Box<T> {
    fn make_plan(&self, name: &str, area: f64) -> Result<PlanningOutcome> {
        (**self).make_plan(name, area)
    }
}

impl<T: ArchitecturalPlanning + ?Sized> ArchitecturalPlanning for Arc<T> {
    fn make_plan(&self, name: &str, area: f64) -> Result<PlanningOutcome> {
        (**self).make_plan(name, area)
    }
}
