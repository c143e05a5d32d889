use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use marquee_config::{
    Config, ConfigLoad, ConfigLoader, ConfigOverrides, ConfigWarnings,
    StorageBackend,
};
use marquee_server::{
    AppState, create_router,
    infra::startup::{connect_store, init_sql_store, seed_catalog},
};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "marquee-server", version)]
#[command(about = "Movie catalog HTTP service backed by memory or SQL storage")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Path to a TOML configuration file
    #[arg(long, env = "MARQUEE_CONFIG")]
    config: Option<PathBuf>,

    /// Env file to load instead of `./.env`; must exist when given
    #[arg(long, env = "MARQUEE_ENV_FILE")]
    env_file: Option<PathBuf>,

    /// Server host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Storage backend: `memory` or `sql` (overrides config)
    #[arg(long)]
    storage: Option<StorageBackend>,

    /// Database URL for the sql backend (overrides config)
    #[arg(long)]
    database_url: Option<String>,
}

impl ServeArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            backend: self.storage,
            database_url: self.database_url.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(subcommand)]
    Db(DbCommand),
}

#[derive(Debug, Subcommand)]
enum DbCommand {
    /// Create the movies table if it does not exist and exit
    Init,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_runtime_config(&cli.serve)?;

    match cli.command {
        Some(Command::Db(DbCommand::Init)) => run_db_init(&config).await,
        None => run_server(config).await,
    }
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new().with_overrides(args.overrides());
    if let Some(path) = &args.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &args.env_file {
        loader = loader.with_env_file(path);
    }
    let ConfigLoad { config, warnings } =
        loader.load().context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file loaded");
    }
    log_warnings(&warnings);

    Ok(config)
}

fn log_warnings(warnings: &ConfigWarnings) {
    for warning in warnings.iter() {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }
}

async fn run_db_init(config: &Config) -> anyhow::Result<()> {
    let url = config
        .storage
        .database_url
        .as_deref()
        .context("`db init` needs DATABASE_URL or --database-url")?;

    init_sql_store(url, config.storage.max_connections)
        .await
        .context("failed to initialize the movies table")?;
    info!("movies table is ready");
    Ok(())
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    let config = Arc::new(config);

    let store = connect_store(&config.storage)
        .await
        .context("failed to initialize movie store")?;
    let state = AppState::new(store, Arc::clone(&config));

    if let Some(path) = &config.storage.seed_path {
        seed_catalog(state.catalog(), path)
            .await
            .with_context(|| format!("failed to seed from {}", path.display()))?;
    }

    let app = create_router(state);
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        address = %addr,
        backend = %config.storage.backend,
        dev_mode = config.dev_mode,
        "marquee server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(
            tokio::signal::unix::SignalKind::terminate(),
        ) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
