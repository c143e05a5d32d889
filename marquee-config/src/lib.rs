//! Configuration library for the Marquee movie service.
//!
//! Settings are layered from built-in defaults, an optional TOML file, the
//! process environment (including a `.env` file) and finally explicit
//! overrides supplied by the caller, usually the command line. The composed
//! [`Config`] is checked by [`validation::apply_guard_rails`] before it is
//! handed out.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigOverrides, error::ConfigLoadError,
};
pub use models::{
    Config, ConfigMetadata, CorsConfig, ServerConfig, StorageBackend,
    StorageConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
