use crate::domain::model::{Rating, Title, TitleType, NOT_AVAILABLE};

pub(crate) fn title(name: &str) -> Title {
    titled_with(name, &[])
}

pub(crate) fn titled_with(name: &str, ratings: &[(&str, &str)]) -> Title {
    Title {
        title: name.to_string(),
        year: "2000".to_string(),
        runtime: NOT_AVAILABLE.to_string(),
        director: NOT_AVAILABLE.to_string(),
        genre: NOT_AVAILABLE.to_string(),
        actors: NOT_AVAILABLE.to_string(),
        plot: NOT_AVAILABLE.to_string(),
        poster: NOT_AVAILABLE.to_string(),
        title_type: TitleType::Movie,
        imdb_id: format!("tt-{}", name),
        ratings: ratings
            .iter()
            .map(|(source, value)| Rating::new(*source, *value))
            .collect(),
    }
}
