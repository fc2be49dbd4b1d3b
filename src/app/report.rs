//! Plain-text views of search results and comparisons.

use crate::app::export::{render_series, ExportFormat};
use crate::core::pagination::Pagination;
use crate::core::selector::ComparisonSlots;
use crate::domain::model::{SearchItem, Title, TitleType};
use crate::utils::error::Result;
use std::fmt::Write as _;

const NO_POSTER: &str = "(no poster)";

fn type_badge(title_type: TitleType) -> &'static str {
    match title_type {
        TitleType::Movie => "Movie",
        TitleType::Series => "Series",
        TitleType::Episode => "Episode",
        TitleType::Other => "Other",
    }
}

pub fn render_results(items: &[SearchItem], pagination: Pagination) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Search results ({} total)",
        pagination.total_results()
    );
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {} ({}) [{}] {}",
            i + 1,
            item.title,
            item.year,
            type_badge(item.title_type),
            item.imdb_id
        );
    }
    if pagination.total_pages() > 1 {
        let _ = writeln!(
            out,
            "Page {} of {}",
            pagination.page(),
            pagination.total_pages()
        );
    }
    out
}

pub fn render_title(title: &Title) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({}) {}", title.title, title.year, title.runtime);
    let _ = writeln!(out, "  Poster:   {}", title.poster_url().unwrap_or(NO_POSTER));
    let _ = writeln!(out, "  Director: {}", title.director);
    let _ = writeln!(out, "  Genre:    {}", title.genre);
    let _ = writeln!(out, "  Actors:   {}", title.actors);
    let _ = writeln!(out, "  Plot:     {}", title.plot);
    if title.ratings.is_empty() {
        let _ = writeln!(out, "  Ratings:  none");
    } else {
        let _ = writeln!(out, "  Ratings:");
        for rating in &title.ratings {
            let _ = writeln!(out, "    {:<26} {}", rating.source, rating.value);
        }
    }
    out
}

/// Both slots, then the rating charts once both are filled.
pub fn render_comparison(slots: &ComparisonSlots) -> Result<String> {
    let mut out = String::new();
    let [first, second] = slots.as_array();

    out.push_str("[1] ");
    match first {
        Some(title) => out.push_str(&render_title(title)),
        None => out.push_str("Select a movie or series\n"),
    }
    out.push_str("[2] ");
    match second {
        Some(title) => out.push_str(&render_title(title)),
        None => out.push_str("Select another one to compare\n"),
    }

    if let Some(data) = slots.chart_data() {
        out.push('\n');
        out.push_str(&render_series(&data, ExportFormat::Table)?);
    }
    Ok(out)
}
