use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// Sentinel OMDb uses for any missing field, including the poster URL.
pub const NOT_AVAILABLE: &str = "N/A";

/// Number of results OMDb returns per search page.
pub const RESULTS_PER_PAGE: u32 = 10;

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl Rating {
    pub fn new(source: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleType {
    Movie,
    Series,
    Episode,
    #[serde(other)]
    Other,
}

impl fmt::Display for TitleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TitleType::Movie => "movie",
            TitleType::Series => "series",
            TitleType::Episode => "episode",
            TitleType::Other => "other",
        };
        f.write_str(label)
    }
}

/// Type filter for searches. `All` sends an empty `type` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    All,
    Movie,
    Series,
}

impl SearchType {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            SearchType::All => "",
            SearchType::Movie => "movie",
            SearchType::Series => "series",
        }
    }
}

impl FromStr for SearchType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(SearchType::All),
            "movie" | "movies" => Ok(SearchType::Movie),
            "series" => Ok(SearchType::Series),
            other => Err(format!(
                "unknown type '{}', expected all, movie or series",
                other
            )),
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchType::All => f.write_str("all"),
            other => f.write_str(other.as_query_value()),
        }
    }
}

/// Full detail record for one title, as returned by an `i=<imdbID>` lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default = "not_available")]
    pub year: String,
    #[serde(rename = "Runtime", default = "not_available")]
    pub runtime: String,
    #[serde(rename = "Director", default = "not_available")]
    pub director: String,
    #[serde(rename = "Genre", default = "not_available")]
    pub genre: String,
    #[serde(rename = "Actors", default = "not_available")]
    pub actors: String,
    #[serde(rename = "Plot", default = "not_available")]
    pub plot: String,
    #[serde(rename = "Poster", default = "not_available")]
    pub poster: String,
    #[serde(rename = "Type", default = "default_title_type")]
    pub title_type: TitleType,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(rename = "Ratings", default)]
    pub ratings: Vec<Rating>,
}

fn default_title_type() -> TitleType {
    TitleType::Other
}

impl Title {
    pub fn poster_url(&self) -> Option<&str> {
        poster_url(&self.poster)
    }
}

/// One row of a search result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchItem {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default = "not_available")]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type", default = "default_title_type")]
    pub title_type: TitleType,
    #[serde(rename = "Poster", default = "not_available")]
    pub poster: String,
}

impl SearchItem {
    pub fn poster_url(&self) -> Option<&str> {
        poster_url(&self.poster)
    }
}

fn poster_url(raw: &str) -> Option<&str> {
    if raw.is_empty() || raw == NOT_AVAILABLE {
        None
    } else {
        Some(raw)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(rename = "Search", default)]
    pub items: Vec<SearchItem>,
    #[serde(rename = "totalResults", default, deserialize_with = "lenient_count")]
    pub total_results: u32,
}

/// OMDb sends counts as decimal strings; anything unparsable counts as zero.
/// Counts beyond `u32::MAX` saturate, whether sent as a string or a number.
fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => match s.trim().parse::<u64>() {
            Ok(n) => saturating_count(n),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => u32::MAX,
            Err(_) => 0,
        },
        serde_json::Value::Number(n) => n.as_u64().map(saturating_count).unwrap_or(0),
        _ => 0,
    })
}

fn saturating_count(n: u64) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_deserializes_omdb_detail() {
        let json = serde_json::json!({
            "Title": "Inception",
            "Year": "2010",
            "Runtime": "148 min",
            "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan",
            "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt",
            "Plot": "A thief who steals corporate secrets...",
            "Poster": "N/A",
            "Ratings": [
                {"Source": "Internet Movie Database", "Value": "8.8/10"},
                {"Source": "Rotten Tomatoes", "Value": "87%"}
            ],
            "imdbID": "tt1375666",
            "Type": "movie",
            "Response": "True"
        });

        let title: Title = serde_json::from_value(json).unwrap();
        assert_eq!(title.title, "Inception");
        assert_eq!(title.title_type, TitleType::Movie);
        assert_eq!(title.ratings.len(), 2);
        assert_eq!(title.poster_url(), None);
        assert_eq!(title.ratings[1], Rating::new("Rotten Tomatoes", "87%"));
    }

    #[test]
    fn test_title_defaults_missing_fields() {
        let json = serde_json::json!({"Title": "Sparse", "Type": "game"});
        let title: Title = serde_json::from_value(json).unwrap();
        assert_eq!(title.director, NOT_AVAILABLE);
        assert_eq!(title.title_type, TitleType::Other);
        assert!(title.ratings.is_empty());
    }

    #[test]
    fn test_search_page_parses_string_total() {
        let json = serde_json::json!({
            "Search": [
                {"Title": "Batman Begins", "Year": "2005", "imdbID": "tt0372784", "Type": "movie", "Poster": "https://img/bb.jpg"}
            ],
            "totalResults": "587",
            "Response": "True"
        });
        let page: SearchPage = serde_json::from_value(json).unwrap();
        assert_eq!(page.total_results, 587);
        assert_eq!(page.items[0].poster_url(), Some("https://img/bb.jpg"));
    }

    #[test]
    fn test_search_page_oversized_total_saturates() {
        let json = serde_json::json!({"Search": [], "totalResults": 5_000_000_000u64});
        let page: SearchPage = serde_json::from_value(json).unwrap();
        assert_eq!(page.total_results, u32::MAX);

        let json = serde_json::json!({"Search": [], "totalResults": "5000000000"});
        let page: SearchPage = serde_json::from_value(json).unwrap();
        assert_eq!(page.total_results, u32::MAX);

        let json = serde_json::json!({"Search": [], "totalResults": "99999999999999999999999"});
        let page: SearchPage = serde_json::from_value(json).unwrap();
        assert_eq!(page.total_results, u32::MAX);
    }

    #[test]
    fn test_search_page_garbage_total_is_zero() {
        let json = serde_json::json!({"Search": [], "totalResults": "lots"});
        let page: SearchPage = serde_json::from_value(json).unwrap();
        assert_eq!(page.total_results, 0);
    }

    #[test]
    fn test_search_type_parsing() {
        assert_eq!("".parse::<SearchType>().unwrap(), SearchType::All);
        assert_eq!("Movie".parse::<SearchType>().unwrap(), SearchType::Movie);
        assert_eq!("series".parse::<SearchType>().unwrap(), SearchType::Series);
        assert!("episode".parse::<SearchType>().is_err());
        assert_eq!(SearchType::All.as_query_value(), "");
    }
}
