use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Server rejected submission with status: {status}")]
    RejectedError { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Validation,
    Configuration,
    Serialization,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SubmitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SubmitError::ApiError(_) | SubmitError::RejectedError { .. } => ErrorCategory::Network,
            SubmitError::ValidationError { .. } => ErrorCategory::Validation,
            SubmitError::ConfigError { .. }
            | SubmitError::InvalidConfigValueError { .. }
            | SubmitError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SubmitError::SerializationError(_) => ErrorCategory::Serialization,
            SubmitError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路問題屬於可重試範圍
            SubmitError::ApiError(_) | SubmitError::RejectedError { .. } => ErrorSeverity::Medium,
            SubmitError::ValidationError { .. } | SubmitError::SerializationError(_) => {
                ErrorSeverity::High
            }
            SubmitError::ConfigError { .. }
            | SubmitError::InvalidConfigValueError { .. }
            | SubmitError::MissingConfigError { .. } => ErrorSeverity::High,
            SubmitError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SubmitError::ApiError(_) => {
                "Could not reach the order API. Check your network connection and the endpoint URL."
                    .to_string()
            }
            SubmitError::RejectedError { status } => {
                format!("The order API rejected the submission (HTTP {}).", status)
            }
            SubmitError::ValidationError { message } => {
                format!("Submission rejected before sending: {}", message)
            }
            SubmitError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            SubmitError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            SubmitError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required but missing", field)
            }
            SubmitError::SerializationError(_) => {
                "The server response could not be understood.".to_string()
            }
            SubmitError::IoError(_) => "A local file operation failed.".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SubmitError::ApiError(_) => {
                "Verify the endpoint URL and retry once the network is available".to_string()
            }
            SubmitError::RejectedError { .. } => {
                "Check the order fields and the API-side logs, then submit again".to_string()
            }
            SubmitError::ValidationError { .. } => {
                "Fix the reported field value and submit again".to_string()
            }
            SubmitError::ConfigError { .. }
            | SubmitError::InvalidConfigValueError { .. }
            | SubmitError::MissingConfigError { .. } => {
                "Review the CLI flags and the TOML profile for typos".to_string()
            }
            SubmitError::SerializationError(_) => {
                "Confirm the endpoint returns a JSON object".to_string()
            }
            SubmitError::IoError(_) => "Check file paths and permissions".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SubmitError>;
