use async_trait::async_trait;
use marquee_model::{Movie, NewMovie};
use sqlx::{
    AnyPool, Row,
    any::{AnyPoolOptions, AnyRow},
};
use tracing::{debug, info};

use super::MovieStore;
use crate::error::{Result, StoreError};

const SELECT_COLUMNS: &str =
    "SELECT id, imdb_id, title, year, rating, is_featured FROM movies";

/// SQL flavour behind an `Any` connection URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlDialect {
    Postgres,
    Sqlite,
}

impl SqlDialect {
    pub fn from_url(url: &str) -> Result<Self> {
        let scheme = url
            .split_once(':')
            .map(|(scheme, _)| scheme.to_ascii_lowercase())
            .unwrap_or_default();

        match scheme.as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(StoreError::Internal(format!(
                "unsupported database scheme '{other}'"
            ))),
        }
    }

    fn create_table(self) -> &'static str {
        match self {
            Self::Postgres => {
                r#"
                CREATE TABLE IF NOT EXISTS movies (
                    id BIGSERIAL PRIMARY KEY,
                    imdb_id TEXT NOT NULL UNIQUE,
                    title TEXT NOT NULL,
                    year BIGINT NOT NULL,
                    rating DOUBLE PRECISION NOT NULL,
                    is_featured BOOLEAN NOT NULL
                )
                "#
            }
            Self::Sqlite => {
                r#"
                CREATE TABLE IF NOT EXISTS movies (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    imdb_id TEXT NOT NULL UNIQUE,
                    title TEXT NOT NULL,
                    year INTEGER NOT NULL,
                    rating REAL NOT NULL,
                    is_featured INTEGER NOT NULL
                )
                "#
            }
        }
    }
}

/// Relational store reached through the `sqlx` `Any` driver.
///
/// Works against PostgreSQL and SQLite URLs. Uniqueness of `imdb_id` is
/// enforced by the table constraint, so concurrent duplicate inserts are
/// settled by the database itself.
#[derive(Debug, Clone)]
pub struct SqlMovieStore {
    pool: AnyPool,
    dialect: SqlDialect,
}

impl SqlMovieStore {
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        sqlx::any::install_default_drivers();
        let dialect = SqlDialect::from_url(url)?;

        let mut options =
            AnyPoolOptions::new().max_connections(max_connections.max(1));
        if dialect == SqlDialect::Sqlite && is_in_memory(url) {
            // Every new connection to an in-memory SQLite URL opens a fresh,
            // empty database; pin a single connection for the pool lifetime.
            options = options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = options.connect(url).await.map_err(|e| {
            StoreError::Internal(format!("Failed to connect to database: {e}"))
        })?;

        info!(dialect = ?dialect, "connected to SQL movie store");
        Ok(Self { pool, dialect })
    }

    /// Create the `movies` table and its year index when absent.
    pub async fn initialize_schema(&self) -> Result<()> {
        sqlx::query(self.dialect.create_table())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                StoreError::Internal(format!(
                    "Failed to create movies table: {e}"
                ))
            })?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_movies_year ON movies(year)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            StoreError::Internal(format!("Failed to create index: {e}"))
        })?;

        info!("movies schema ready");
        Ok(())
    }

    fn map_row(row: &AnyRow) -> Result<Movie> {
        let year: i64 = row.try_get("year").map_err(decode_error)?;
        let year = i32::try_from(year).map_err(|_| {
            StoreError::Internal(format!("stored year {year} is out of range"))
        })?;

        // PostgreSQL hands back a real boolean, SQLite an integer.
        let is_featured = match row.try_get::<bool, _>("is_featured") {
            Ok(flag) => flag,
            Err(_) => {
                row.try_get::<i64, _>("is_featured")
                    .map_err(decode_error)?
                    != 0
            }
        };

        Ok(Movie {
            id: row.try_get("id").map_err(decode_error)?,
            imdb_id: row.try_get("imdb_id").map_err(decode_error)?,
            title: row.try_get("title").map_err(decode_error)?,
            year,
            rating: row.try_get("rating").map_err(decode_error)?,
            is_featured,
        })
    }

    fn map_rows(rows: Vec<AnyRow>) -> Result<Vec<Movie>> {
        rows.iter().map(Self::map_row).collect()
    }
}

#[async_trait]
impl MovieStore for SqlMovieStore {
    async fn list_all(&self) -> Result<Vec<Movie>> {
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                StoreError::Internal(format!("Failed to list movies: {e}"))
            })?;

        Self::map_rows(rows)
    }

    async fn list_by_year(&self, year: i32) -> Result<Vec<Movie>> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE year = $1 ORDER BY id"
        ))
        .bind(i64::from(year))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            StoreError::Internal(format!(
                "Failed to list movies for year {year}: {e}"
            ))
        })?;

        Self::map_rows(rows)
    }

    async fn find_by_imdb_id(&self, imdb_id: &str) -> Result<Movie> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE imdb_id = $1"))
            .bind(imdb_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                StoreError::Internal(format!("Failed to lookup movie: {e}"))
            })?;

        match row {
            Some(row) => Self::map_row(&row),
            None => Err(StoreError::NotFound(imdb_id.to_string())),
        }
    }

    async fn insert(&self, movie: NewMovie) -> Result<Movie> {
        let result = sqlx::query(
            r#"
            INSERT INTO movies (imdb_id, title, year, rating, is_featured)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(movie.imdb_id.as_str())
        .bind(movie.title.as_str())
        .bind(i64::from(movie.year))
        .bind(movie.rating)
        .bind(movie.is_featured)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {}
            Err(sqlx::Error::Database(db_err))
                if db_err.is_unique_violation() =>
            {
                return Err(StoreError::DuplicateKey {
                    imdb_id: movie.imdb_id,
                });
            }
            Err(e) => {
                return Err(StoreError::Internal(format!(
                    "Failed to insert movie: {e}"
                )));
            }
        }

        // Rows are never updated or deleted, so the natural key identifies
        // the row just written.
        let stored = self.find_by_imdb_id(&movie.imdb_id).await?;
        debug!(id = stored.id, imdb_id = %stored.imdb_id, "movie inserted");
        Ok(stored)
    }

    async fn count(&self) -> Result<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM movies")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                StoreError::Internal(format!("Failed to count movies: {e}"))
            })?;
        let total: i64 = row.try_get("total").map_err(decode_error)?;
        Ok(total.max(0) as u64)
    }
}

fn decode_error(err: sqlx::Error) -> StoreError {
    StoreError::Internal(format!("Failed to decode movie row: {err}"))
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
