pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::OmdbClient;
pub use config::AppConfig;
pub use core::{
    charts::{build_grouped_series, build_radar_series, ChartData, SeriesPoint},
    normalizer::{normalize, RatingSource},
    selector::{ComparisonSelector, ComparisonSlots, SelectOutcome},
    session::{ComparisonSession, SearchOutcome},
};
pub use utils::error::{CompareError, Result};
