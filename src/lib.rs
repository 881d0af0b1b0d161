pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{MemorySink, WriterSink};
pub use config::{toml_config::TomlConfig, PlanningSettings};
pub use crate::core::{
    Architect, ArchitectOnly, ArchitecturalPlanning, CostEstimator, PlanProvider, PlanSink,
    PlanningService, RawMaterialEstimator, DEFAULT_RATE_PER_SQ_FT,
};
pub use domain::model::{
    BuildingDescriptor, CostEstimate, OutputFormat, PlanBlock, PlanDescription, PlanningOutcome,
};
pub use utils::error::{PlanError, Result};
