//! # serbisyod — Serbisyo daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file + env var overrides)
//! - Initialise structured logging
//! - Construct the provider directory adapter
//! - Construct application services, injecting the directory via its port
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use serbisyo_adapter_directory_seed::SeedProviderDirectory;
use serbisyo_adapter_http_axum::state::AppState;
use serbisyo_app::services::catalog_service::CatalogService;
use serbisyo_app::services::provider_service::ProviderService;
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Directory
    let directory = if config.directory.seed_enabled {
        SeedProviderDirectory::default()
    } else {
        SeedProviderDirectory::with_providers(Vec::new())
    };

    // Services
    let catalog_service = CatalogService::new();
    let provider_service = ProviderService::new(directory);

    // HTTP
    let state = AppState::new(catalog_service, provider_service);
    let app = serbisyo_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!("serbisyod listening on http://{bind_addr}");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve once either SIGINT or SIGTERM arrives.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install interrupt handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
