use std::{any::type_name_of_val, fmt, sync::Arc};

use marquee_model::{Movie, NewMovie};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{error::StoreError, store::MovieStore};

pub const INVALID_YEAR: &str = "invalid year";
pub const NOT_FOUND: &str = "not found";
pub const ALREADY_EXISTS: &str = "movie already exists";

/// Failure half of a catalog operation, one variant per response class.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::NotFound(NOT_FOUND.to_string()),
            StoreError::DuplicateKey { .. } => {
                Self::Conflict(ALREADY_EXISTS.to_string())
            }
            StoreError::Internal(detail) => Self::Internal(detail),
        }
    }
}

/// Counts produced by [`MovieCatalogService::seed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// Interpret the raw `year` query value.
///
/// Absent and empty values both mean "no filter". Anything else must be a
/// plain decimal `i32`; surrounding whitespace is not tolerated.
pub fn parse_year_filter(
    raw: Option<&str>,
) -> Result<Option<i32>, CatalogError> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i32>()
            .map(Some)
            .map_err(|_| CatalogError::BadRequest(INVALID_YEAR.to_string())),
    }
}

/// Translates catalog requests into store calls and classifies the results.
pub struct MovieCatalogService<S>
where
    S: MovieStore + ?Sized,
{
    store: Arc<S>,
}

impl<S> Clone for MovieCatalogService<S>
where
    S: MovieStore + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> fmt::Debug for MovieCatalogService<S>
where
    S: MovieStore + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MovieCatalogService")
            .field("store", &type_name_of_val(self.store.as_ref()))
            .finish()
    }
}

impl<S> MovieCatalogService<S>
where
    S: MovieStore + ?Sized,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub async fn list_movies(
        &self,
        year: Option<&str>,
    ) -> Result<Vec<Movie>, CatalogError> {
        let movies = match parse_year_filter(year)? {
            None => self.store.list_all().await,
            Some(year) => self.store.list_by_year(year).await,
        };

        movies.map_err(|err| match err {
            StoreError::Internal(detail) => CatalogError::Internal(detail),
            other => CatalogError::Internal(other.to_string()),
        })
    }

    pub async fn get_movie(&self, imdb_id: &str) -> Result<Movie, CatalogError> {
        Ok(self.store.find_by_imdb_id(imdb_id).await?)
    }

    /// Store a new movie. `payload` carries the bind result so that a
    /// malformed body never reaches storage.
    pub async fn create_movie(
        &self,
        payload: Result<NewMovie, String>,
    ) -> Result<Movie, CatalogError> {
        let movie = payload.map_err(CatalogError::BadRequest)?;
        let imdb_id = movie.imdb_id.clone();

        match self.store.insert(movie).await {
            Ok(created) => {
                debug!(id = created.id, imdb_id = %imdb_id, "movie created");
                Ok(created)
            }
            Err(err) => {
                if let StoreError::Internal(detail) = &err {
                    warn!(imdb_id = %imdb_id, error = %detail, "insert failed");
                }
                Err(err.into())
            }
        }
    }

    /// Insert initial records, skipping any whose `imdb_id` already exists.
    pub async fn seed(
        &self,
        movies: Vec<NewMovie>,
    ) -> Result<SeedReport, CatalogError> {
        let mut report = SeedReport::default();

        for movie in movies {
            match self.store.insert(movie).await {
                Ok(_) => report.inserted += 1,
                Err(StoreError::DuplicateKey { imdb_id }) => {
                    debug!(imdb_id = %imdb_id, "seed record already present");
                    report.skipped += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }

        Ok(report)
    }
}
