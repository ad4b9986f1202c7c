use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {message}")]
    TomlError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Not a number: '{input}'")]
    InputError { input: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ConvError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvError::TomlError { .. }
            | ConvError::ConfigValidationError { .. }
            | ConvError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ConvError::InputError { .. } => ErrorCategory::Input,
            ConvError::IoError(_) | ConvError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for a failed run, by severity.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvError::IoError(e) => format!("Could not read or write a file: {}", e),
            ConvError::SerializationError(e) => format!("Could not encode the result: {}", e),
            ConvError::TomlError { message } => format!("The config file is not valid TOML: {}", message),
            ConvError::ConfigValidationError { field, message } => {
                format!("Config entry '{}' is invalid: {}", field, message)
            }
            ConvError::InvalidConfigValueError { field, value, reason } => {
                format!("Config entry '{}' has an invalid value '{}': {}", field, value, reason)
            }
            ConvError::InputError { input } => format!("'{}' is not a temperature", input),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvError::IoError(_) => "Check that the file exists and is readable",
            ConvError::SerializationError(_) => "Retry without --json",
            ConvError::TomlError { .. } => "Fix the TOML syntax in the config file",
            ConvError::ConfigValidationError { .. }
            | ConvError::InvalidConfigValueError { .. } => {
                "Edit the [strings] and [converter] sections of the config file"
            }
            ConvError::InputError { .. } => {
                "Enter a number such as 98.6, or drop --strict to read it as 0"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvError>;
