use anyhow::Result;
use httpmock::prelude::*;
use omdb_compare::app::export::{render_series, write_to_file, ExportFormat};
use omdb_compare::app::interactive::run_interactive;
use omdb_compare::{AppConfig, ComparisonSession, OmdbClient, SearchOutcome};
use tempfile::TempDir;

fn detail(id: &str, title: &str, ratings: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "Title": title,
        "Year": "1995",
        "Runtime": "170 min",
        "Genre": "Crime, Drama",
        "Director": "Michael Mann",
        "Actors": "Al Pacino, Robert De Niro",
        "Plot": "A group of high-end professional thieves...",
        "Poster": "N/A",
        "Ratings": ratings,
        "imdbID": id,
        "Type": "movie",
        "Response": "True"
    })
}

fn mock_catalog(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/").query_param("s", "heat");
        then.status(200).json_body(serde_json::json!({
            "Search": [
                {"Title": "Heat", "Year": "1995", "imdbID": "tt0113277", "Type": "movie", "Poster": "N/A"},
                {"Title": "Ronin", "Year": "1998", "imdbID": "tt0122690", "Type": "movie", "Poster": "N/A"},
                {"Title": "Collateral", "Year": "2004", "imdbID": "tt0369339", "Type": "movie", "Poster": "N/A"}
            ],
            "totalResults": "3",
            "Response": "True"
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/").query_param("i", "tt0113277");
        then.status(200).json_body(detail(
            "tt0113277",
            "Heat",
            serde_json::json!([
                {"Source": "Internet Movie Database", "Value": "8.3/10"},
                {"Source": "Rotten Tomatoes", "Value": "88%"},
                {"Source": "Metacritic", "Value": "76/100"}
            ]),
        ));
    });
    server.mock(|when, then| {
        when.method(GET).path("/").query_param("i", "tt0122690");
        then.status(200).json_body(detail(
            "tt0122690",
            "Ronin",
            serde_json::json!([
                {"Source": "Internet Movie Database", "Value": "7.2/10"},
                {"Source": "Metacritic", "Value": "67/100"}
            ]),
        ));
    });
    server.mock(|when, then| {
        when.method(GET).path("/").query_param("i", "tt0369339");
        then.status(200).json_body(detail(
            "tt0369339",
            "Collateral",
            serde_json::json!([
                {"Source": "Rotten Tomatoes", "Value": "86%"}
            ]),
        ));
    });
}

fn session_for(server: &MockServer) -> ComparisonSession<OmdbClient> {
    let config = AppConfig::new(server.url("/"), Some("test-key".to_string()), 5).unwrap();
    ComparisonSession::new(OmdbClient::new(&config).unwrap())
}

#[tokio::test]
async fn test_search_select_and_chart() -> Result<()> {
    let server = MockServer::start();
    mock_catalog(&server);
    let mut session = session_for(&server);

    session.set_query("heat");
    assert_eq!(session.search(1).await, SearchOutcome::Loaded { count: 3 });
    assert_eq!(session.pagination().total_pages(), 1);

    assert!(!session.select_result(1).await?.unwrap().completed);
    assert!(session.select_result(2).await?.unwrap().completed);

    let charts = session.chart_data().unwrap();
    assert_eq!(charts.grouped.len(), 3);
    assert!((charts.grouped[0].a_score - 83.0).abs() < 1e-9);
    assert!((charts.grouped[0].b_score - 72.0).abs() < 1e-9);
    assert_eq!(charts.grouped[1].b_score, 0.0);
    assert_eq!(charts.grouped[2].b_score, 67.0);

    // radar follows Heat's three ratings; Ronin has no Rotten Tomatoes score
    assert_eq!(charts.radar.len(), 3);
    assert_eq!(charts.radar[1].label, "RT");
    assert_eq!(charts.radar[1].b_score, 0.0);

    // third pick replaces the second slot only
    let third = session.select_result(3).await?.unwrap();
    assert!(!third.completed);
    assert_eq!(session.slots().first().unwrap().title, "Heat");
    assert_eq!(session.slots().second().unwrap().title, "Collateral");

    Ok(())
}

#[tokio::test]
async fn test_export_csv_to_file() -> Result<()> {
    let server = MockServer::start();
    mock_catalog(&server);
    let mut session = session_for(&server);

    session.select("tt0113277").await.unwrap();
    session.select("tt0122690").await.unwrap();

    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("out").join("heat_vs_ronin.csv");
    let rendered = render_series(&session.chart_data().unwrap(), ExportFormat::Csv)?;
    write_to_file(&path, &rendered)?;

    let mut reader = csv::Reader::from_path(&path)?;
    let headers = reader.headers()?.clone();
    assert_eq!(&headers[2], "Heat");
    assert_eq!(&headers[3], "Ronin");

    let records: Vec<csv::StringRecord> = reader.records().collect::<std::result::Result<_, _>>()?;
    assert_eq!(records.len(), 6);
    assert_eq!(&records[0][1], "IMDb");
    assert_eq!(&records[0][2], "83");
    assert_eq!(&records[3][0], "radar");

    Ok(())
}

#[tokio::test]
async fn test_interactive_session_script() -> Result<()> {
    let server = MockServer::start();
    mock_catalog(&server);
    let mut session = session_for(&server);

    let script = "search heat\npick 1\npick 2\nbogus\nclear\nshow\nquit\nsearch never-run\n";
    let mut out = Vec::new();
    run_interactive(&mut session, script.as_bytes(), &mut out).await?;
    let out = String::from_utf8(out)?;

    assert!(out.contains("Search results (3 total)"));
    assert!(out.contains("Slot 1: Heat (1995)"));
    assert!(out.contains("Radar"));
    assert!(out.contains("Unknown command 'bogus'"));
    assert!(out.contains("Comparison cleared"));
    assert!(out.contains("Select a movie or series"));
    assert!(session.slots().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_failed_detail_keeps_selection() -> Result<()> {
    let server = MockServer::start();
    mock_catalog(&server);
    server.mock(|when, then| {
        when.method(GET).path("/").query_param("i", "tt-bad");
        then.status(200).json_body(serde_json::json!({
            "Response": "False",
            "Error": "Incorrect IMDb ID."
        }));
    });
    let mut session = session_for(&server);

    session.select("tt0113277").await.unwrap();
    assert!(session.select("tt-bad").await.is_none());
    assert_eq!(session.message(), Some("Incorrect IMDb ID."));
    assert_eq!(session.slots().first().unwrap().title, "Heat");
    assert!(session.slots().second().is_none());

    Ok(())
}
