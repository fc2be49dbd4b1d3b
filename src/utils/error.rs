use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status}")]
    HttpStatusError { status: u16 },

    #[error("No results: {message}")]
    NoResults { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    NotFound,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CompareError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CompareError::ApiError(_) | CompareError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            CompareError::NoResults { .. } => ErrorCategory::NotFound,
            CompareError::CsvError(_)
            | CompareError::IoError(_)
            | CompareError::SerializationError(_) => ErrorCategory::Data,
            CompareError::ConfigValidationError { .. }
            | CompareError::InvalidConfigValueError { .. }
            | CompareError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CompareError::InvalidInput { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::NotFound | ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// Message shown to the user. Transport failures collapse into one
    /// generic connectivity message; API misses keep the API's own wording.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CompareError::ApiError(_) | CompareError::HttpStatusError { .. } => {
                "Error connecting to the API".to_string()
            }
            CompareError::NoResults { message } => message.clone(),
            CompareError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
            CompareError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            CompareError::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            CompareError::InvalidInput { message } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and API key, then try again",
            ErrorCategory::NotFound => "Try a different search term or type filter",
            ErrorCategory::Data => "Check the output path and that the API response is valid JSON",
            ErrorCategory::Configuration => {
                "Set OMDB_API_KEY or pass --api-key, and check the config file"
            }
            ErrorCategory::Input => "Run 'help' to see the accepted commands",
        }
    }
}

pub type Result<T> = std::result::Result<T, CompareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_results_is_low_severity() {
        let err = CompareError::NoResults {
            message: "Movie not found!".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "Movie not found!");
    }

    #[test]
    fn test_http_status_uses_generic_message() {
        let err = CompareError::HttpStatusError { status: 503 };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.user_friendly_message(), "Error connecting to the API");
    }

    #[test]
    fn test_missing_config_is_critical() {
        let err = CompareError::MissingConfigError {
            field: "api_key".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("api_key"));
    }
}
