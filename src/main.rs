// Main entry point - Dependency injection, polling and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::dashboard_state::DashboardState;
use crate::application::normalizer::Normalizer;
use crate::application::polling_scheduler::PollingScheduler;
use crate::domain::view_model::ViewModel;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::http_snapshot_source::HttpSnapshotSource;
use crate::presentation::app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let cfg = load_app_config().context("Failed to load configuration")?;
    cfg.log_config();

    // Create snapshot source (infrastructure layer)
    let source = Arc::new(HttpSnapshotSource::new(
        cfg.source.endpoint.clone(),
        cfg.source.timeout(),
    )?);
    tracing::info!("Polling readings from {}", source.endpoint());

    // Shared view model, written only by the scheduler
    let state = DashboardState::new(ViewModel::initial(cfg.polling.initial_aqi));

    // Start polling (application layer)
    let scheduler = PollingScheduler::new(
        source,
        state.clone(),
        Normalizer::new(cfg.polling.retain_aqi_on_zero),
        cfg.polling.interval(),
        cfg.polling.overlap,
    );
    let polling = scheduler.start();

    let app_state = Arc::new(AppState {
        dashboard_service: DashboardService::new(state, cfg.dashboard.title.clone()),
    });

    // Build router (presentation layer)
    let router = presentation::router(app_state);

    let addr: SocketAddr = cfg
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid server.bind address '{}'", cfg.server.bind))?;
    tracing::info!("Starting enviro-dashboard on {}", addr);

    // `polling` is dropped on every exit path below, which stops the scheduler
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    polling.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
