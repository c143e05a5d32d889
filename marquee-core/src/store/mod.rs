//! Storage gateway port and its backends.
//!
//! Both backends honour the same contract: inserts either persist the record
//! and return it with its assigned id, or fail with
//! [`StoreError::DuplicateKey`](crate::StoreError::DuplicateKey) when the
//! `imdb_id` is already taken. Reads have no side effects.

pub mod memory;
pub mod sql;

pub use memory::InMemoryMovieStore;
pub use sql::{SqlDialect, SqlMovieStore};

use async_trait::async_trait;
use marquee_model::{Movie, NewMovie};

use crate::error::Result;

#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Every movie in insertion order.
    async fn list_all(&self) -> Result<Vec<Movie>>;

    /// Movies whose `year` equals the argument, possibly none.
    async fn list_by_year(&self, year: i32) -> Result<Vec<Movie>>;

    /// Exact-match lookup by natural key. A miss is
    /// [`StoreError::NotFound`](crate::StoreError::NotFound).
    async fn find_by_imdb_id(&self, imdb_id: &str) -> Result<Movie>;

    /// Persist a new movie and return it with its assigned id.
    ///
    /// At most one of several concurrent inserts sharing an `imdb_id` may
    /// succeed; the others observe `DuplicateKey`.
    async fn insert(&self, movie: NewMovie) -> Result<Movie>;

    /// Number of stored movies.
    async fn count(&self) -> Result<u64>;
}
