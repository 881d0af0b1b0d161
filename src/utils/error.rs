use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Area and cost per sq.ft. must be positive values (area: {area}, rate: {rate})")]
    InvalidArgument { area: f64, rate: f64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cannot write non-finite '{field}' as JSON")]
    NonFiniteValue { field: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlanError::InvalidArgument { .. } => ErrorCategory::Input,
            PlanError::ConfigError { .. } | PlanError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            PlanError::IoError(_)
            | PlanError::SerializationError(_)
            | PlanError::NonFiniteValue { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PlanError::InvalidArgument { .. } => {
                "Pass a built-up area and a rate that are both greater than zero"
            }
            PlanError::ConfigError { .. } => {
                "Check that the configuration file exists and is valid TOML"
            }
            PlanError::InvalidConfigValueError { .. } => {
                "Fix the highlighted configuration value and run again"
            }
            PlanError::IoError(_) => "Check that standard output is writable",
            PlanError::SerializationError(_) => "Try again with --format text",
            PlanError::NonFiniteValue { .. } => {
                "Pass finite numbers or use --format text"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlanError::InvalidArgument { area, rate } => format!(
                "Cannot estimate cost: area ({}) and rate ({}) must both be positive",
                area, rate
            ),
            PlanError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
