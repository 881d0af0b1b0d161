use crate::core::{
    CostEstimate, CostEstimator, PlanBlock, PlanProvider, PlanSink, PlanningOutcome, Result,
};
use crate::domain::ports::ArchitecturalPlanning;

pub const DEFAULT_RATE_PER_SQ_FT: f64 = 1200.0;

/// Adapts a plan provider and a cost estimator to the single
/// [`ArchitecturalPlanning`] interface.
///
/// `make_plan` always emits the plan block before asking for an estimate, so
/// a rejected area still leaves the plan visible on the sink. The service
/// holds no mutable state and can be shared across threads.
pub struct PlanningService<P: PlanProvider, E: CostEstimator, S: PlanSink> {
    provider: P,
    estimator: E,
    default_rate: f64,
    sink: S,
}

impl<P: PlanProvider, E: CostEstimator, S: PlanSink> PlanningService<P, E, S> {
    pub fn new(provider: P, estimator: E, default_rate: f64, sink: S) -> Self {
        Self {
            provider,
            estimator,
            default_rate,
            sink,
        }
    }

    pub fn default_rate(&self) -> f64 {
        self.default_rate
    }
}

impl<P: PlanProvider, E: CostEstimator, S: PlanSink> ArchitecturalPlanning
    for PlanningService<P, E, S>
{
    fn make_plan(&self, name: &str, area: f64) -> Result<PlanningOutcome> {
        let plan = self.provider.produce_plan(name, area);
        self.sink.emit(&PlanBlock::Plan(plan.clone()))?;
        tracing::debug!("Plan emitted for '{}'", name);

        let total = self.estimator.estimate(area, self.default_rate)?;
        let cost = CostEstimate {
            area,
            rate: self.default_rate,
            total,
        };
        self.sink.emit(&PlanBlock::cost(name, cost))?;
        tracing::debug!("Cost emitted for '{}': {}", name, total);

        Ok(PlanningOutcome {
            plan,
            cost: Some(cost),
        })
    }
}
