use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid argument '{field}' = {value}: {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid configuration value for '{field}' = {value}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
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

impl CalcError {
    pub fn invalid_argument(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        CalcError::InvalidArgument {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidArgument { .. } => ErrorCategory::Input,
            CalcError::InvalidConfigValueError { .. }
            | CalcError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            CalcError::IoError(_) | CalcError::CsvError(_) | CalcError::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::InvalidArgument { field, .. } => {
                format!("Provide a non-negative, finite value for '{}'", field)
            }
            CalcError::InvalidConfigValueError { field, .. } => {
                format!("Check the value of '{}' in your arguments or config file", field)
            }
            CalcError::ConfigValidationError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            CalcError::IoError(_) => {
                "Check that the output directory is writable".to_string()
            }
            CalcError::CsvError(_) | CalcError::SerializationError(_) => {
                "Try a different output format with --format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidArgument { field, reason, .. } => {
                format!("Invalid input for {}: {}", field, reason)
            }
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            CalcError::ConfigValidationError { message, .. } => {
                format!("Could not read configuration: {}", message)
            }
            CalcError::IoError(e) => format!("Could not write the report: {}", e),
            CalcError::CsvError(e) => format!("Could not build the CSV report: {}", e),
            CalcError::SerializationError(e) => {
                format!("Could not build the JSON report: {}", e)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
