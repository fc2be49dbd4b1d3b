use crate::core::charts::{ChartData, SeriesPoint};
use crate::utils::error::{CompareError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(ExportFormat::Table),
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            other => Err(CompareError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: table, csv, tsv, json".to_string(),
            }),
        }
    }
}

/// Renders both chart series in `format`.
pub fn render_series(data: &ChartData, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Table => Ok(render_table(data)),
        ExportFormat::Csv => delimited(data, b','),
        ExportFormat::Tsv => delimited(data, b'\t'),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(data)?),
    }
}

fn rows(data: &ChartData) -> impl Iterator<Item = (&'static str, &SeriesPoint)> {
    data.grouped
        .iter()
        .map(|p| ("grouped", p))
        .chain(data.radar.iter().map(|p| ("radar", p)))
}

fn delimited(data: &ChartData, delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["chart", "label", data.a_title.as_str(), data.b_title.as_str()])?;
    for (chart, point) in rows(data) {
        writer.write_record([
            chart.to_string(),
            point.label.clone(),
            format_score(point.a_score),
            format_score(point.b_score),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CompareError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| CompareError::InvalidInput {
        message: format!("Export produced invalid UTF-8: {}", e),
    })
}

fn render_table(data: &ChartData) -> String {
    let mut out = String::new();
    for (heading, points) in [("Ratings", &data.grouped), ("Radar", &data.radar)] {
        let _ = writeln!(
            out,
            "{:<18} {:>24} {:>24}",
            heading,
            truncate(&data.a_title, 24),
            truncate(&data.b_title, 24)
        );
        for point in points.iter() {
            let _ = writeln!(
                out,
                "{:<18} {:>24} {:>24}",
                point.label,
                format_score(point.a_score),
                format_score(point.b_score)
            );
        }
        out.push('\n');
    }
    out
}

/// One decimal, with a trailing ".0" dropped.
fn format_score(score: f64) -> String {
    let s = format!("{:.1}", score);
    match s.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => s,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(max.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

pub fn write_to_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    tracing::info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
