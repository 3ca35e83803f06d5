//! Launchboard Server
//!
//! Loads the launch records file and serves the dashboard.
//!
//! Run with: cargo run -- [--data FILE] [--port PORT]
//!
//! # Configuration
//!
//! Settings are read from `--config`, else `./launchboard.toml` or the user
//! config directory, then overridden by environment variables. A config file
//! or variable that cannot be parsed stops startup:
//! - `LAUNCHBOARD_DATASET`: CSV file (default: spacex_launch_dash.csv)
//! - `LAUNCHBOARD_HOST`: Host to bind to (default: 127.0.0.1)
//! - `LAUNCHBOARD_PORT`: Port to listen on (default: 8050)
//! - `LAUNCHBOARD_SCATTER_RANGE_POLICY`: all_sites_only | always
//! - `LAUNCHBOARD_SLIDER_DOMAIN`: fixed | data | covering
//! - `RUST_LOG`: Log filter (default: from `logging.level`)
//!
//! Command-line flags override both.

use anyhow::Context;
use clap::Parser;
use launchboard::api::{serve, AppState};
use launchboard::config::{generate_default_config, Config, LoggingConfig};
use launchboard::dataset::DatasetLoader;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "launchboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive dashboard for launch records")]
struct Cli {
    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Launch records CSV file
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Fail on the first malformed row
    #[arg(long)]
    strict: bool,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let config_path = cli.config.clone().or_else(Config::default_location);
    let mut config = Config::load_optional(config_path.as_deref()).with_context(|| match &config_path {
        Some(path) => format!("loading config {}", path.display()),
        None => "loading config from environment".to_string(),
    })?;
    apply_cli_overrides(&mut config, &cli);

    init_tracing(&config.logging);

    tracing::info!("Starting Launchboard v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }
    tracing::info!("Dataset: {:?}", config.dataset.path);
    tracing::info!(
        "Scatter range policy: {:?}, slider domain: {:?}",
        config.dashboard.scatter_range_policy,
        config.dashboard.slider.domain
    );

    let loaded = DatasetLoader::new()
        .with_strict(config.dataset.strict)
        .load(&config.dataset.path)
        .with_context(|| format!("loading dataset {}", config.dataset.path.display()))?;

    if loaded.report.rows_failed > 0 {
        tracing::warn!(
            "Skipped {} malformed rows while loading the dataset",
            loaded.report.rows_failed
        );
    }

    let dataset = Arc::new(loaded.dataset);
    let bounds = dataset.payload_bounds();
    tracing::info!(
        "Loaded {} launches from {} sites, payload range {}",
        dataset.len(),
        dataset.sites().len(),
        bounds
    );

    let state = AppState::new(dataset, &config.dashboard, config.api.clone())
        .context("wiring dashboard callbacks")?;
    serve(state, &config.api).await?;

    tracing::info!("Launchboard stopped");
    Ok(())
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(data) = &cli.data {
        config.dataset.path = data.clone();
    }
    if let Some(host) = &cli.host {
        config.api.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.api.port = port;
    }
    if cli.strict {
        config.dataset.strict = true;
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("launchboard={level},tower_http={level}", level = logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
