//! discography-web - read-only album catalog browser
//!
//! Serves the album collection and per-album tracklists from a hosted
//! catalog database. Starts in unconfigured mode, showing setup
//! instructions, when no valid backend URL and access key are available.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use discography_common::config::{self, AppConfig, ConfigOverrides, TomlConfig};
use discography_common::BackendClient;
use discography_web::{build_router, AppState};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for discography-web
#[derive(Parser, Debug)]
#[command(name = "discography-web")]
#[command(about = "Read-only album catalog browser")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "DISCOGRAPHY_PORT")]
    port: Option<u16>,

    /// Address to bind
    #[arg(long, env = "DISCOGRAPHY_HOST")]
    host: Option<String>,

    /// Backend endpoint URL (overrides DISCOGRAPHY_BACKEND_URL)
    #[arg(long)]
    backend_url: Option<String>,

    /// Backend access key (overrides DISCOGRAPHY_BACKEND_KEY)
    #[arg(long)]
    backend_key: Option<String>,

    /// TOML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config file first: it may carry the log level
    let config_path = config::locate_config_file(args.config);
    let (toml, config_error) = TomlConfig::read_or_default(config_path.as_deref());
    let log_level = toml.log_level().to_string();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "discography_web={level},discography_common={level},tower_http={level}",
                    level = log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Discography (discography-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    if let Some(e) = config_error {
        warn!("{}; ignoring config file", e);
    }

    let overrides = ConfigOverrides {
        backend_url: args.backend_url,
        backend_key: args.backend_key,
        host: args.host,
        port: args.port,
    };
    let app_config = AppConfig::from_sources(overrides, toml, config_path);

    if let Some(path) = &app_config.config_path {
        info!("Config file: {}", path.display());
    }
    info!(
        "Backend URL: {}",
        app_config.backend_url.as_deref().unwrap_or("(not set)")
    );
    info!(
        "Request timeout: {}s",
        app_config.request_timeout.as_secs()
    );

    // Built once, shared read-only by every request
    let client = BackendClient::initialize(
        app_config.backend_url.as_deref(),
        app_config.backend_key.as_deref(),
        app_config.request_timeout,
    );
    if client.is_none() {
        warn!("Running in unconfigured mode: pages will show setup instructions");
    }

    let state = AppState::from_client(client);
    let app = build_router(state);

    let addr = app_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("discography-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
