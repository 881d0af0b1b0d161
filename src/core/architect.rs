use crate::core::{PlanBlock, PlanDescription, PlanProvider, PlanSink, PlanningOutcome, Result};
use crate::domain::model::{FINISHING_LEVEL, FLOOR_LAYOUT, STRUCTURE_TYPE};
use crate::domain::ports::ArchitecturalPlanning;

/// Draws up architectural plans. Knows nothing about costs.
///
/// Accepts any name and any area, including zero or negative ones; only the
/// estimator enforces positivity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Architect;

impl Architect {
    pub fn new() -> Self {
        Self
    }
}

impl PlanProvider for Architect {
    fn produce_plan(&self, name: &str, area: f64) -> PlanDescription {
        tracing::debug!("Drawing plan for '{}' ({} sq.ft.)", name, area);
        PlanDescription {
            building_name: name.to_string(),
            area,
            floor_layout: FLOOR_LAYOUT.to_string(),
            structure_type: STRUCTURE_TYPE.to_string(),
            finishing_level: FINISHING_LEVEL.to_string(),
        }
    }
}

/// Exposes a plan provider through the target interface on its own, without
/// any cost estimation.
pub struct ArchitectOnly<P: PlanProvider, S: PlanSink> {
    provider: P,
    sink: S,
}

impl<P: PlanProvider, S: PlanSink> ArchitectOnly<P, S> {
    pub fn new(provider: P, sink: S) -> Self {
        Self { provider, sink }
    }
}

impl<P: PlanProvider, S: PlanSink> ArchitecturalPlanning for ArchitectOnly<P, S> {
    fn make_plan(&self, name: &str, area: f64) -> Result<PlanningOutcome> {
        let plan = self.provider.produce_plan(name, area);
        self.sink.emit(&PlanBlock::Plan(plan.clone()))?;
        Ok(PlanningOutcome { plan, cost: None })
    }
}
