use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::StorageBackend;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub storage: FileStorageConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
    pub dev_mode: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileStorageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<StorageBackend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_path: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_methods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_headers: Option<Vec<String>>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub storage_backend: Option<StorageBackend>,
    pub database_url: Option<String>,
    pub database_max_connections: Option<u32>,
    pub seed_path: Option<PathBuf>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub cors_allowed_methods: Option<Vec<String>>,
    pub cors_allowed_headers: Option<Vec<String>>,
    pub dev_mode: Option<bool>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut env_config = Self::default();

        env_config.config_path =
            non_empty(lookup("MARQUEE_CONFIG")).map(PathBuf::from);
        env_config.server_host = non_empty(lookup("SERVER_HOST"));
        env_config.server_port =
            lookup("SERVER_PORT").and_then(|s| s.trim().parse().ok());
        env_config.storage_backend =
            lookup("STORAGE_BACKEND").and_then(|s| s.parse().ok());
        env_config.database_url = non_empty(lookup("DATABASE_URL"));
        env_config.database_max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|s| s.trim().parse().ok());
        env_config.seed_path = non_empty(lookup("SEED_PATH")).map(PathBuf::from);

        env_config.cors_allowed_origins =
            lookup("CORS_ALLOWED_ORIGINS").map(|raw| parse_csv(&raw));
        env_config.cors_allowed_methods =
            lookup("CORS_ALLOWED_METHODS").map(|raw| parse_csv(&raw));
        env_config.cors_allowed_headers =
            lookup("CORS_ALLOWED_HEADERS").map(|raw| parse_csv(&raw));

        env_config.dev_mode =
            lookup("DEV_MODE").and_then(|raw| parse_bool(&raw));

        env_config
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|part| {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
