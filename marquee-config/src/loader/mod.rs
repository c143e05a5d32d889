pub mod error;

use once_cell::sync::Lazy;
use std::{fs, path::PathBuf};

use self::error::ConfigLoadError;
use crate::{
    models::{
        Config, ConfigMetadata, CorsConfig, DEFAULT_HOST,
        DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT, ServerConfig, StorageBackend,
        StorageConfig,
        sources::{EnvConfig, FileConfig},
    },
    validation::{self, ConfigWarnings},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("marquee.toml"),
        PathBuf::from("config/marquee.toml"),
    ]
});

/// Values that win over every other source, usually command-line flags.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub backend: Option<StorageBackend>,
    pub database_url: Option<String>,
}

#[derive(Debug, Default, Clone)]
struct ConfigLoaderOptions {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
    overrides: ConfigOverrides,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.options.overrides = overrides;
        self
    }

    /// Load `.env`, read the process environment and compose the config.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        self.load_with_env(EnvConfig::gather(), env_file_loaded)
    }

    /// An explicit env file must exist; the default `.env` is optional.
    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        match &self.options.env_file {
            Some(path) => {
                dotenvy::from_path(path)?;
                Ok(true)
            }
            None => dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                dotenvy::Error::Io(_) => Ok(false),
                _ => Err(err.into()),
            }),
        }
    }

    /// Compose from an already gathered environment.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let (config, warnings) =
            self.compose_config(file_config, env, config_path, env_file_loaded)?;
        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigLoadError::MissingConfig { path });
                }
                path
            }
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(found) => found.clone(),
                None => return Ok((None, None)),
            },
        };

        let contents =
            fs::read_to_string(&path).map_err(|err| ConfigLoadError::Io {
                path: path.clone(),
                source: err,
            })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                path: path.clone(),
                source: err,
            })?;

        Ok((Some(file_config), Some(path)))
    }

    fn compose_config(
        &self,
        file_config: Option<FileConfig>,
        env: EnvConfig,
        config_path: Option<PathBuf>,
        env_file_loaded: bool,
    ) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
        let mut warnings = ConfigWarnings::default();

        if config_path.is_none() {
            warnings.push_with_hint(
                "No marquee.toml detected; using environment variables and defaults",
                "Create marquee.toml or pass --config to pin settings",
            );
        }

        let FileConfig {
            server: file_server,
            storage: file_storage,
            cors: file_cors,
            dev_mode: file_dev_mode,
        } = file_config.unwrap_or_default();
        let overrides = self.options.overrides.clone();

        let server = ServerConfig {
            host: overrides
                .host
                .or(env.server_host)
                .or(file_server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides
                .port
                .or(env.server_port)
                .or(file_server.port)
                .unwrap_or(DEFAULT_PORT),
        };

        let database_url = overrides
            .database_url
            .or(env.database_url)
            .or(file_storage.database_url)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let backend = overrides
            .backend
            .or(env.storage_backend)
            .or(file_storage.backend)
            .unwrap_or(if database_url.is_some() {
                StorageBackend::Sql
            } else {
                StorageBackend::Memory
            });

        let storage = StorageConfig {
            backend,
            database_url,
            max_connections: env
                .database_max_connections
                .or(file_storage.max_connections)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            seed_path: env.seed_path.or(file_storage.seed_path),
        };

        let defaults = CorsConfig::default();
        let cors = CorsConfig {
            allowed_origins: env
                .cors_allowed_origins
                .or(file_cors.allowed_origins)
                .unwrap_or(defaults.allowed_origins),
            allowed_methods: env
                .cors_allowed_methods
                .or(file_cors.allowed_methods)
                .unwrap_or(defaults.allowed_methods),
            allowed_headers: env
                .cors_allowed_headers
                .or(file_cors.allowed_headers)
                .unwrap_or(defaults.allowed_headers),
        };

        let config = Config {
            server,
            storage,
            cors,
            dev_mode: env.dev_mode.or(file_dev_mode).unwrap_or(false),
            metadata: ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        };

        let guard_warnings = validation::apply_guard_rails(&config)?;
        warnings.extend(guard_warnings);

        Ok((config, warnings))
    }
}
