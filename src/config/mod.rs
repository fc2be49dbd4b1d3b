#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_required_field, validate_url, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Resolved settings the OMDb client is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_endpoint: String,
    pub api_key: String,
    pub timeout_seconds: u64,
}

impl AppConfig {
    pub fn new(api_endpoint: String, api_key: Option<String>, timeout_seconds: u64) -> Result<Self> {
        let api_key = validate_required_field("api_key", &api_key)?.clone();
        let config = Self {
            api_endpoint,
            api_key,
            timeout_seconds,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CompareError;

    #[test]
    fn test_missing_api_key() {
        let err = AppConfig::new("https://www.omdbapi.com/".to_string(), None, 10).unwrap_err();
        assert!(matches!(err, CompareError::MissingConfigError { field } if field == "api_key"));
    }

    #[test]
    fn test_blank_api_key_rejected() {
        let err = AppConfig::new("https://www.omdbapi.com/".to_string(), Some(" ".into()), 10);
        assert!(err.is_err());
    }

    #[test]
    fn test_valid_config() {
        let config =
            AppConfig::new("https://www.omdbapi.com/".to_string(), Some("k".into()), 10).unwrap();
        assert_eq!(config.api_key(), "k");
        assert_eq!(config.timeout_seconds(), 10);
    }
}
