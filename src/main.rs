use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use terra::config::ServerConfig;
use terra::server::ApiServer;

#[derive(Parser)]
#[command(
    name = "terra",
    version,
    about = "Country information HTTP service backed by a static JSON dataset",
    long_about = None
)]
struct Cli {
    /// Host to bind (overrides config/env)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides config/env)
    #[arg(short, long)]
    port: Option<u16>,

    /// Path of the country dataset JSON file (overrides config/env)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Path of a TOML config file (otherwise environment variables are used)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable CORS
    #[arg(long, default_value = "false")]
    no_cors: bool,

    /// Disable request logging
    #[arg(long, default_value = "false")]
    no_request_logging: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, default_value = "text")]
    log_format: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    setup_tracing(&cli.log_format, cli.verbose)?;

    tracing::info!("terra Country Information Service starting");

    // Resolve configuration: file or environment, then CLI overrides
    let mut config = match &cli.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => ServerConfig::from_env().context("Failed to load config from environment")?,
    };

    if cli.host.is_some() || cli.port.is_some() {
        let host = cli
            .host
            .unwrap_or_else(|| config.bind_address.ip().to_string());
        let port = cli.port.unwrap_or_else(|| config.bind_address.port());
        config.bind_address = format!("{host}:{port}")
            .parse()
            .context("Invalid bind address")?;
    }

    if let Some(data) = cli.data {
        config.data_path = data;
    }

    if cli.no_cors {
        config.enable_cors = false;
    }

    if cli.no_request_logging {
        config.enable_request_logging = false;
    }

    // Create the server; this loads the dataset exactly once
    let server = ApiServer::new(config).context("Failed to create server")?;

    println!("{}", server.info().display());
    println!();
    println!("API Endpoints:");
    println!("  GET  /                 - Service index");
    println!("  GET  /search?country=  - Search country by name");
    println!("  GET  /random           - Random country");
    println!("  GET  /health           - Health check");
    println!("  GET  /health/live      - Liveness probe");
    println!("  GET  /health/ready     - Readiness probe");
    println!();
    println!(
        "terra server listening on http://{}",
        server.info().bind_address
    );
    println!("Press Ctrl+C to stop.\n");

    // Start with graceful shutdown
    server
        .start_with_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    tracing::info!("Shutdown signal received");
                }
                Err(e) => {
                    tracing::error!("Failed to wait for Ctrl+C: {}", e);
                }
            }
        })
        .await?;

    println!("terra server stopped.");
    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("terra=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("terra=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}
