use serde::{Deserialize, Serialize};
use std::fmt;

pub const FLOOR_LAYOUT: &str = "2BHK x 4 units per floor";
pub const STRUCTURE_TYPE: &str = "RCC framed structure";
pub const FINISHING_LEVEL: &str = "Standard residential spec";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingDescriptor {
    pub name: String,
    /// Built-up area in square feet.
    pub area: f64,
}

impl BuildingDescriptor {
    pub fn new(name: impl Into<String>, area: f64) -> Self {
        Self {
            name: name.into(),
            area,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDescription {
    pub building_name: String,
    pub area: f64,
    pub floor_layout: String,
    pub structure_type: String,
    pub finishing_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub area: f64,
    pub rate: f64,
    pub total: f64,
}

/// A single unit of emitted output, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanBlock {
    Plan(PlanDescription),
    Cost {
        building_name: String,
        estimate: CostEstimate,
    },
}

impl PlanBlock {
    pub fn cost(building_name: impl Into<String>, estimate: CostEstimate) -> Self {
        PlanBlock::Cost {
            building_name: building_name.into(),
            estimate,
        }
    }

    pub fn building_name(&self) -> &str {
        match self {
            PlanBlock::Plan(plan) => &plan.building_name,
            PlanBlock::Cost { building_name, .. } => building_name,
        }
    }

    /// Name of the first number in this block that is NaN or infinite.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        match self {
            PlanBlock::Plan(plan) => (!plan.area.is_finite()).then_some("area"),
            PlanBlock::Cost { estimate, .. } => [
                ("area", estimate.area),
                ("rate", estimate.rate),
                ("total", estimate.total),
            ]
            .into_iter()
            .find(|(_, value)| !value.is_finite())
            .map(|(field, _)| field),
        }
    }
}

/// What a target implementation hands back once all of its blocks are out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningOutcome {
    pub plan: PlanDescription,
    pub cost: Option<CostEstimate>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Whole numbers keep one decimal place (`1500.0`), anything else prints at
/// full precision.
///
/// Large values stay in positional notation (`12000000.0`, never `1.2E7`) so
/// cost lines read the same at every magnitude.
pub fn format_amount(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

impl fmt::Display for PlanDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== ARCHITECTURAL PLAN ===")?;
        writeln!(f, "Building name   : {}", self.building_name)?;
        writeln!(f, "Built-up area   : {} sq.ft.", format_amount(self.area))?;
        writeln!(f, "Floor layout    : {}", self.floor_layout)?;
        writeln!(f, "Structure type  : {}", self.structure_type)?;
        write!(f, "Finishing level : {}", self.finishing_level)
    }
}

impl fmt::Display for PlanBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanBlock::Plan(plan) => fmt::Display::fmt(plan, f),
            PlanBlock::Cost {
                building_name,
                estimate,
            } => {
                writeln!(f, "--- COST ESTIMATION (via Adapter) ---")?;
                writeln!(f, "Building name               : {}", building_name)?;
                writeln!(
                    f,
                    "Estimated raw-material cost : {}",
                    format_amount(estimate.total)
                )?;
                write!(f, "(Using rate {} per sq.ft.)", format_amount(estimate.rate))
            }
        }
    }
}
