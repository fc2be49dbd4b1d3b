//! Maps heterogeneous critic ratings onto a common 0-100 scale.
//!
//! OMDb reports each provider in its own format: IMDb as `"7.4/10"`, Rotten
//! Tomatoes as `"85%"`, Metacritic as `"70/100"`. [`normalize`] turns any of
//! them into an `f64` in `[0, 100]`.
//!
//! Malformed values never fail. A value without a leading number scores 0,
//! and every result is clamped into range.

use regex::Regex;
use std::sync::OnceLock;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// The closed set of providers the normalizer knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingSource {
    Imdb,
    RottenTomatoes,
    Metacritic,
}

impl RatingSource {
    /// Canonical chart order.
    pub const ALL: [RatingSource; 3] = [
        RatingSource::Imdb,
        RatingSource::RottenTomatoes,
        RatingSource::Metacritic,
    ];

    /// Source name exactly as OMDb spells it.
    pub fn source_name(&self) -> &'static str {
        match self {
            RatingSource::Imdb => "Internet Movie Database",
            RatingSource::RottenTomatoes => "Rotten Tomatoes",
            RatingSource::Metacritic => "Metacritic",
        }
    }

    /// Axis label for the grouped-bar chart.
    pub fn label(&self) -> &'static str {
        match self {
            RatingSource::Imdb => "IMDb",
            RatingSource::RottenTomatoes => "Rotten Tomatoes",
            RatingSource::Metacritic => "Metacritic",
        }
    }

    /// Substring match, so decorated names like "Metacritic (critics)" still
    /// classify.
    pub fn classify(source: &str) -> Option<RatingSource> {
        Self::ALL
            .into_iter()
            .find(|s| source.contains(s.source_name()))
    }
}

/// Score for `raw` reported by `source`, in `[0, 100]`. Unknown sources and
/// unparsable values score 0.
pub fn normalize(source: &str, raw: &str) -> f64 {
    let score = match RatingSource::classify(source) {
        Some(RatingSource::Imdb) => leading_float(before_slash(raw)).map(|v| v * 10.0),
        Some(RatingSource::RottenTomatoes) => leading_integer(raw.trim().trim_end_matches('%')),
        Some(RatingSource::Metacritic) => leading_integer(before_slash(raw)),
        None => {
            tracing::debug!("Unknown rating source '{}', scoring 0", source);
            Some(MIN_SCORE)
        }
    };

    match score {
        Some(v) if v.is_finite() => v.clamp(MIN_SCORE, MAX_SCORE),
        _ => {
            tracing::debug!("Malformed rating '{}' from '{}', scoring 0", raw, source);
            MIN_SCORE
        }
    }
}

fn before_slash(raw: &str) -> &str {
    raw.split('/').next().unwrap_or(raw)
}

fn float_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*[+-]?(\d+(\.\d*)?|\.\d+)").expect("static regex"))
}

fn integer_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*[+-]?\d+").expect("static regex"))
}

/// Longest leading decimal number, ignoring whatever follows it.
fn leading_float(s: &str) -> Option<f64> {
    let m = float_prefix().find(s)?;
    m.as_str().trim().parse().ok()
}

/// Longest leading integer; a fractional part is dropped, not rounded.
/// Parsed as `f64` so oversized digit runs saturate instead of failing.
fn leading_integer(s: &str) -> Option<f64> {
    let m = integer_prefix().find(s)?;
    m.as_str().trim().parse().ok()
}
