use crate::adapters::omdb::DEFAULT_ENDPOINT;
use crate::app::export::ExportFormat;
use crate::config::toml_config::TomlConfig;
use crate::config::{AppConfig, DEFAULT_TIMEOUT_SECONDS};
use crate::domain::model::SearchType;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "omdb-compare")]
#[command(about = "Search OMDb and compare two movies or series side by side")]
pub struct CliConfig {
    /// OMDb API key
    #[arg(long, env = "OMDB_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// OMDb endpoint (defaults to the public API)
    #[arg(long, global = true)]
    pub api_endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Search titles by free text
    Search {
        query: String,
        #[arg(long = "type", value_parser = parse_search_type, default_value = "all")]
        search_type: SearchType,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Compare two titles by imdbID
    Compare {
        first: String,
        second: String,
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,
        /// Write the chart series to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Interactive search-and-compare loop on stdin
    Session,
}

fn parse_search_type(s: &str) -> std::result::Result<SearchType, String> {
    s.parse()
}

impl CliConfig {
    /// Merges the optional config file with command-line flags; flags win.
    /// The file is validated on its own first, so its errors name its keys.
    pub fn resolve(&self) -> Result<(AppConfig, Option<TomlConfig>)> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from {}", path.display());
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let endpoint = self.api_endpoint.clone().unwrap_or_else(|| {
            file.as_ref()
                .map_or(DEFAULT_ENDPOINT, TomlConfig::endpoint)
                .to_string()
        });
        let api_key = self
            .api_key
            .clone()
            .or_else(|| file.as_ref().and_then(|f| f.api_key().map(str::to_string)));
        let timeout = self.timeout.unwrap_or_else(|| {
            file.as_ref()
                .map_or(DEFAULT_TIMEOUT_SECONDS, TomlConfig::timeout_seconds)
        });

        let app = AppConfig::new(endpoint, api_key, timeout)?;
        Ok((app, file))
    }
}
