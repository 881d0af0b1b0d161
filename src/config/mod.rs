pub mod toml_config;

use crate::core::DEFAULT_RATE_PER_SQ_FT;
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_amount, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::validation::validate_path;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_BUILDING_NAME: &str = "Residential Apartment Building";
pub const DEFAULT_AREA_SQ_FT: f64 = 1500.0;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "plan-estimator")]
#[command(about = "Draws up a building plan and estimates its raw-material cost")]
pub struct CliConfig {
    /// Building name printed on the plan
    #[arg(long, default_value = DEFAULT_BUILDING_NAME)]
    pub name: String,

    /// Built-up area in square feet
    #[arg(long, default_value_t = DEFAULT_AREA_SQ_FT, allow_negative_numbers = true)]
    pub area: f64,

    /// Cost per square foot; overrides the configuration file
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format; overrides the configuration file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print the plan only, without a cost estimate
    #[arg(long)]
    pub plan_only: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_file_config(&self) -> Result<Option<TomlConfig>> {
        match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                tracing::info!("📁 Loading configuration from: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Ok(Some(config))
            }
            None => Ok(None),
        }
    }

    pub fn resolve(&self, file: Option<&TomlConfig>) -> PlanningSettings {
        PlanningSettings::resolve(self.rate, self.format, file)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(rate) = self.rate {
            validate_positive_amount("rate", rate)?;
        }
        Ok(())
    }
}

/// Effective settings after layering defaults, file and command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanningSettings {
    pub default_rate: f64,
    pub format: OutputFormat,
}

impl Default for PlanningSettings {
    fn default() -> Self {
        Self {
            default_rate: DEFAULT_RATE_PER_SQ_FT,
            format: OutputFormat::default(),
        }
    }
}

impl PlanningSettings {
    /// Command-line values win over the file, the file wins over defaults.
    pub fn resolve(
        rate: Option<f64>,
        format: Option<OutputFormat>,
        file: Option<&TomlConfig>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            default_rate: rate
                .or_else(|| file.map(TomlConfig::default_rate))
                .unwrap_or(defaults.default_rate),
            format: format
                .or_else(|| file.and_then(TomlConfig::output_format))
                .unwrap_or(defaults.format),
        }
    }
}

impl Validate for PlanningSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_amount("default_rate", self.default_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config(rate: f64, format: Option<OutputFormat>) -> TomlConfig {
        TomlConfig {
            planning: toml_config::PlanningConfig { default_rate: rate },
            output: Some(toml_config::OutputConfig { format }),
        }
    }

    #[test]
    fn test_defaults_without_file_or_overrides() {
        let settings = PlanningSettings::resolve(None, None, None);
        assert_eq!(settings.default_rate, 1200.0);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = file_config(800.0, Some(OutputFormat::Json));
        let settings = PlanningSettings::resolve(None, None, Some(&file));
        assert_eq!(settings.default_rate, 800.0);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_command_line_overrides_file() {
        let file = file_config(800.0, Some(OutputFormat::Json));
        let settings =
            PlanningSettings::resolve(Some(1000.0), Some(OutputFormat::Text), Some(&file));
        assert_eq!(settings.default_rate, 1000.0);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parses_defaults_and_negative_area() {
        let config = CliConfig::parse_from(["plan-estimator"]);
        assert_eq!(config.name, DEFAULT_BUILDING_NAME);
        assert_eq!(config.area, 1500.0);
        assert!(config.rate.is_none());

        let config = CliConfig::parse_from(["plan-estimator", "--area", "-10", "--format", "json"]);
        assert_eq!(config.area, -10.0);
        assert_eq!(config.format, Some(OutputFormat::Json));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_rejects_non_positive_rate_override() {
        let config = CliConfig::parse_from(["plan-estimator", "--rate", "0"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["plan-estimator", "--rate", "99.5"]);
        assert!(config.validate().is_ok());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_blank_config_path_rejected_on_load() {
        let config = CliConfig::parse_from(["plan-estimator", "--config", "  "]);
        let err = config.load_file_config().unwrap_err();
        assert!(matches!(
            err,
            crate::utils::error::PlanError::InvalidConfigValueError { ref field, .. } if field == "config"
        ));
    }
}
