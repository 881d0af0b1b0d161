pub mod architect;
pub mod estimator;
pub mod planning_service;

pub use crate::domain::model::{CostEstimate, PlanBlock, PlanDescription, PlanningOutcome};
pub use crate::domain::ports::{ArchitecturalPlanning, CostEstimator, PlanProvider, PlanSink};
pub use crate::utils::error::Result;
pub use architect::{Architect, ArchitectOnly};
pub use estimator::RawMaterialEstimator;
pub use planning_service::{PlanningService, DEFAULT_RATE_PER_SQ_FT};
