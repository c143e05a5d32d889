use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use marquee_model::NewMovie;
use tracing::debug;

use crate::{AppState, errors::AppResult, response::MovieReply};

/// First value of `name` in the decoded query pairs. Later repeats are
/// ignored.
fn first_param<'a>(
    pairs: &'a [(String, String)],
    name: &str,
) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

pub async fn list_movies_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<MovieReply> {
    // Raw value; parsing is left to the catalog so bad input becomes a 400.
    let year = first_param(&pairs, "year");
    let movies = state.catalog().list_movies(year).await?;
    debug!(count = movies.len(), year = ?year, "listed movies");
    Ok(MovieReply::Listed(movies))
}

pub async fn get_movie_handler(
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> AppResult<MovieReply> {
    let movie = state.catalog().get_movie(&imdb_id).await?;
    Ok(MovieReply::Found(movie))
}

pub async fn create_movie_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewMovie>, JsonRejection>,
) -> AppResult<MovieReply> {
    let payload = payload
        .map(|Json(movie)| movie)
        .map_err(|rejection| rejection.body_text());

    let created = state.catalog().create_movie(payload).await?;
    Ok(MovieReply::Created(created))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_year_wins_when_repeated() {
        let query =
            pairs(&[("year", "2019"), ("sort", "x"), ("year", "1999")]);
        assert_eq!(first_param(&query, "year"), Some("2019"));
    }

    #[test]
    fn absent_param_is_none() {
        assert_eq!(first_param(&pairs(&[("sort", "x")]), "year"), None);
        assert_eq!(first_param(&pairs(&[("year", "")]), "year"), Some(""));
    }
}
