use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use marquee_config::{StorageBackend, StorageConfig};
use marquee_core::{
    CatalogError, InMemoryMovieStore, MovieCatalogService, MovieStore,
    NewMovie, SeedReport, SqlMovieStore, StoreError,
};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("the sql backend needs a database URL")]
    MissingDatabaseUrl,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to read seed file {path}")]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to seed catalog: {0}")]
    Seed(#[from] CatalogError),
}

/// Build the configured backend. SQL backends get their schema ensured.
pub async fn connect_store(
    storage: &StorageConfig,
) -> Result<Arc<dyn MovieStore>, StartupError> {
    match storage.backend {
        StorageBackend::Memory => {
            info!("using in-memory movie store");
            Ok(Arc::new(InMemoryMovieStore::new()))
        }
        StorageBackend::Sql => {
            let url = storage
                .database_url
                .as_deref()
                .ok_or(StartupError::MissingDatabaseUrl)?;
            let store = init_sql_store(url, storage.max_connections).await?;
            Ok(Arc::new(store))
        }
    }
}

/// Connect and create the `movies` table if absent.
pub async fn init_sql_store(
    url: &str,
    max_connections: u32,
) -> Result<SqlMovieStore, StartupError> {
    let store = SqlMovieStore::connect(url, max_connections).await?;
    store.initialize_schema().await?;
    Ok(store)
}

/// Read a JSON array of movies in the wire format.
pub fn load_seed_file(path: &Path) -> Result<Vec<NewMovie>, StartupError> {
    let raw = fs::read_to_string(path).map_err(|source| {
        StartupError::SeedIo {
            path: path.to_path_buf(),
            source,
        }
    })?;

    serde_json::from_str(&raw).map_err(|source| StartupError::SeedParse {
        path: path.to_path_buf(),
        source,
    })
}

pub async fn seed_catalog(
    catalog: &MovieCatalogService<dyn MovieStore>,
    path: &Path,
) -> Result<SeedReport, StartupError> {
    let movies = load_seed_file(path)?;
    let report = catalog.seed(movies).await?;
    info!(
        path = %path.display(),
        inserted = report.inserted,
        skipped = report.skipped,
        "catalog seeded"
    );
    Ok(report)
}
