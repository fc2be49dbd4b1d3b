use crate::config::DEFAULT_TIMEOUT_SECONDS;
use crate::adapters::omdb::DEFAULT_ENDPOINT;
use crate::app::export::ExportFormat;
use crate::utils::error::{CompareError, Result};
use crate::utils::validation::{validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// On-disk configuration, e.g.
///
/// ```toml
/// [api]
/// endpoint = "https://www.omdbapi.com/"
/// api_key = "${OMDB_API_KEY}"
/// timeout_seconds = 10
///
/// [output]
/// format = "csv"
/// path = "./comparison.csv"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiSection,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<ExportFormat>,
    pub path: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CompareError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CompareError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn endpoint(&self) -> &str {
        self.api.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn output_format(&self) -> Option<ExportFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    /// Key still holding an unexpanded `${VAR}` is treated as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty() && !k.contains("${"))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.endpoint", self.endpoint())?;
        validate_range("api.timeout_seconds", self.timeout_seconds(), 1, 300)?;
        Ok(())
    }
}

fn env_var_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex"))
}

/// Expands `${VAR}` from the environment; unknown variables are left as-is.
fn substitute_env_vars(content: &str) -> String {
    env_var_pattern()
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[api]
endpoint = "https://omdb.example.com/"
api_key = "abc123"
timeout_seconds = 5

[output]
format = "tsv"
path = "./cmp.tsv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.endpoint(), "https://omdb.example.com/");
        assert_eq!(config.api_key(), Some("abc123"));
        assert_eq!(config.timeout_seconds(), 5);
        assert_eq!(config.output_format(), Some(ExportFormat::Tsv));
        assert_eq!(config.output_path(), Some("./cmp.tsv"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_seconds(), DEFAULT_TIMEOUT_SECONDS);
        assert!(config.api_key().is_none());
        assert!(config.output_format().is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("OMDB_COMPARE_TEST_KEY", "from-env");

        let config = TomlConfig::from_toml_str(
            r#"
[api]
api_key = "${OMDB_COMPARE_TEST_KEY}"
"#,
        )
        .unwrap();
        assert_eq!(config.api_key(), Some("from-env"));

        std::env::remove_var("OMDB_COMPARE_TEST_KEY");
    }

    #[test]
    fn test_unexpanded_key_counts_as_missing() {
        let config = TomlConfig::from_toml_str(
            r#"
[api]
api_key = "${OMDB_COMPARE_SURELY_UNSET_VAR}"
"#,
        )
        .unwrap();
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[api]
endpoint = "invalid-url"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[api]
timeout_seconds = 0
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[api\nendpoint=").unwrap_err();
        assert!(matches!(err, CompareError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\napi_key = \"file-key\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api_key(), Some("file-key"));
        assert!(config.validate().is_ok());
    }
}
