use std::{fmt, sync::Arc};

use marquee_config::Config;
use marquee_core::{MovieCatalogService, MovieStore};

/// Shared handler state. Cloning is cheap; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub catalog: MovieCatalogService<dyn MovieStore>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(store: Arc<dyn MovieStore>, config: Arc<Config>) -> Self {
        Self {
            catalog: MovieCatalogService::new(store),
            config,
        }
    }

    pub fn catalog(&self) -> &MovieCatalogService<dyn MovieStore> {
        &self.catalog
    }

    pub fn store(&self) -> &Arc<dyn MovieStore> {
        self.catalog.store()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
