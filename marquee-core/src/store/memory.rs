use async_trait::async_trait;
use marquee_model::{Movie, NewMovie};
use parking_lot::RwLock;
use tracing::debug;

use super::MovieStore;
use crate::error::{Result, StoreError};

/// Process-local store backed by a vector.
///
/// The uniqueness check and the append run under the same write lock, which
/// is what makes concurrent duplicate inserts resolve to a single winner.
#[derive(Debug, Default)]
pub struct InMemoryMovieStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    movies: Vec<Movie>,
    last_id: i64,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn list_all(&self) -> Result<Vec<Movie>> {
        Ok(self.inner.read().movies.clone())
    }

    async fn list_by_year(&self, year: i32) -> Result<Vec<Movie>> {
        let inner = self.inner.read();
        Ok(inner
            .movies
            .iter()
            .filter(|movie| movie.year == year)
            .cloned()
            .collect())
    }

    async fn find_by_imdb_id(&self, imdb_id: &str) -> Result<Movie> {
        let inner = self.inner.read();
        inner
            .movies
            .iter()
            .find(|movie| movie.imdb_id == imdb_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(imdb_id.to_string()))
    }

    async fn insert(&self, movie: NewMovie) -> Result<Movie> {
        let mut inner = self.inner.write();

        if inner
            .movies
            .iter()
            .any(|existing| existing.imdb_id == movie.imdb_id)
        {
            return Err(StoreError::DuplicateKey {
                imdb_id: movie.imdb_id,
            });
        }

        inner.last_id += 1;
        let stored = movie.into_movie(inner.last_id);
        inner.movies.push(stored.clone());
        debug!(
            id = stored.id,
            imdb_id = %stored.imdb_id,
            "movie stored in memory"
        );

        Ok(stored)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.inner.read().movies.len() as u64)
    }
}
