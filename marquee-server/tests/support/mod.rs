#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Result, anyhow};
use axum_test::TestServer;
use marquee_config::{
    Config, ConfigMetadata, CorsConfig, ServerConfig, StorageBackend,
    StorageConfig,
};
use marquee_core::{InMemoryMovieStore, MovieStore};
use marquee_server::{
    AppState, create_router, infra::startup::init_sql_store,
};
use serde_json::{Value, json};

pub fn test_config(backend: StorageBackend) -> Config {
    let database_url = match backend {
        StorageBackend::Memory => None,
        StorageBackend::Sql => Some("sqlite::memory:".to_string()),
    };

    Config {
        server: ServerConfig::default(),
        storage: StorageConfig {
            backend,
            database_url,
            ..StorageConfig::default()
        },
        cors: CorsConfig::default(),
        dev_mode: true,
        metadata: ConfigMetadata::default(),
    }
}

pub fn server_for(
    store: Arc<dyn MovieStore>,
    backend: StorageBackend,
) -> Result<TestServer> {
    let state = AppState::new(store, Arc::new(test_config(backend)));
    TestServer::new(create_router(state)).map_err(|err| anyhow!(err.to_string()))
}

pub fn memory_server() -> Result<TestServer> {
    server_for(Arc::new(InMemoryMovieStore::new()), StorageBackend::Memory)
}

pub async fn sqlite_server() -> Result<TestServer> {
    let store = init_sql_store("sqlite::memory:", 1).await?;
    server_for(Arc::new(store), StorageBackend::Sql)
}

pub fn endgame() -> Value {
    json!({
        "imdbID": "tt4154796",
        "title": "Advanger: Endgame",
        "year": 2019,
        "rating": 8.4,
        "isSuperHero": true
    })
}

pub fn matrix() -> Value {
    json!({
        "imdbID": "tt0133093",
        "title": "The Matrix",
        "year": 1999,
        "rating": 8.7,
        "isSuperHero": false
    })
}
