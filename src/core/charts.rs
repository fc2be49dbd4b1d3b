//! Chart-ready series built from two compared titles.

use crate::core::normalizer::{normalize, RatingSource};
use crate::core::selector::ComparisonSlots;
use crate::domain::model::{Rating, Title};
use serde::{Deserialize, Serialize};

/// Upper bound of the value axis every chart shares.
pub const FULL_MARK: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub a_score: f64,
    pub b_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub a_title: String,
    pub b_title: String,
    pub grouped: Vec<SeriesPoint>,
    pub radar: Vec<SeriesPoint>,
}

fn score(rating: Option<&Rating>) -> f64 {
    rating.map_or(0.0, |r| normalize(&r.source, &r.value))
}

fn find_by_source(title: &Title, source: RatingSource) -> Option<&Rating> {
    title
        .ratings
        .iter()
        .find(|r| RatingSource::classify(&r.source) == Some(source))
}

/// One point per canonical source, always three, in IMDb / Rotten Tomatoes /
/// Metacritic order. A title missing a source scores 0 there.
pub fn build_grouped_series(a: &Title, b: &Title) -> Vec<SeriesPoint> {
    RatingSource::ALL
        .into_iter()
        .map(|source| SeriesPoint {
            label: source.label().to_string(),
            a_score: score(find_by_source(a, source)),
            b_score: score(find_by_source(b, source)),
        })
        .collect()
}

/// One point per rating on `a`, in `a`'s order. `b` is matched by the same
/// source name first, then by classified provider, so "Metacritic" on `a`
/// pairs with "Metacritic (critics)" on `b`. `b` scores 0 where it has no
/// such rating; ratings only `b` carries are not plotted.
pub fn build_radar_series(a: &Title, b: &Title) -> Vec<SeriesPoint> {
    a.ratings
        .iter()
        .map(|rating| {
            let matching = b
                .ratings
                .iter()
                .find(|other| other.source == rating.source)
                .or_else(|| {
                    RatingSource::classify(&rating.source)
                        .and_then(|source| find_by_source(b, source))
                });
            SeriesPoint {
                label: radar_label(&rating.source),
                a_score: normalize(&rating.source, &rating.value),
                b_score: score(matching),
            }
        })
        .collect()
}

/// Short axis label: "Internet Movie Database" -> "IMDb", "Rotten Tomatoes" -> "RT".
pub fn radar_label(source: &str) -> String {
    source
        .replace("Internet Movie Database", "IMDb")
        .replace("Rotten Tomatoes", "RT")
}

impl ComparisonSlots {
    /// Both series, or `None` until both slots are filled.
    pub fn chart_data(&self) -> Option<ChartData> {
        let (a, b) = self.pair()?;
        Some(ChartData {
            a_title: a.title.clone(),
            b_title: b.title.clone(),
            grouped: build_grouped_series(a, b),
            radar: build_radar_series(a, b),
        })
    }
}
