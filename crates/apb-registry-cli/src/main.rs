//! APB Registry CLI
//!
//! Loads the APB specs advertised by a registry and prints them, along with
//! the registry's reported match count, as JSON or YAML on stdout.

mod config;
mod telemetry;

use anyhow::{Context, Result};
use apb_registry_client::{LoadedSpecs, RhccRegistry, SpecRegistry};
use clap::Parser;
use tracing::info;

use crate::config::{AppConfig, OutputFormat};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration directory
    #[arg(short, long, env = "CONFIG_DIR", default_value = "config")]
    config_dir: String,

    /// Environment (development, production, etc.)
    #[arg(short, long, env = "ENVIRONMENT", default_value = "development")]
    environment: String,

    /// Registry base URL
    #[arg(short, long, env = "REGISTRY_URL")]
    url: Option<String>,

    /// Search query, passed to the registry unescaped
    #[arg(short, long)]
    query: Option<String>,

    /// Output format (json, yaml)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Log level
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = apply_args(
        AppConfig::load_or_default(&args.config_dir, &args.environment),
        &args,
    );

    let telemetry_config = telemetry::TelemetryConfig::from(&config.logging)
        .with_json_format(config.logging.json_format || args.json_logs);
    telemetry::init_with_config(telemetry_config).context("Failed to initialize logging")?;

    info!(
        registry = %config.registry.name,
        url = %config.registry.url,
        environment = %args.environment,
        "Loading APB specs"
    );

    if config.registry.url.is_empty() {
        anyhow::bail!("No registry URL configured; set registry.url or pass --url");
    }

    let registry =
        RhccRegistry::new(config.registry.clone()).context("Failed to create registry client")?;
    let loaded = registry
        .load_specs()
        .await
        .with_context(|| format!("Failed to load specs from registry {}", registry.name()))?;

    info!(
        produced = loaded.specs.len(),
        total = loaded.total,
        "Finished loading specs"
    );

    println!("{}", render(&loaded, config.output.format)?);
    Ok(())
}

/// Override file and environment configuration with command-line arguments
fn apply_args(mut config: AppConfig, args: &Args) -> AppConfig {
    if let Some(url) = &args.url {
        config.registry.url = url.clone();
    }
    if let Some(query) = &args.query {
        config.registry.query = Some(query.clone());
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(log_level) = &args.log_level {
        config.logging.level = log_level.clone();
    }
    config
}

/// Render loaded specs in the requested format
fn render(loaded: &LoadedSpecs, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(loaded).context("Failed to render specs as JSON")
        }
        OutputFormat::Yaml => serde_yaml::to_string(loaded).context("Failed to render specs as YAML"),
    }
}
