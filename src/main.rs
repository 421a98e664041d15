// Main entry point - dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::consumption_chart::ConsumptionChartController;
use crate::application::energy_chart::EnergyChartController;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_repository::HttpReadingRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::chart_runtime::init_chart_runtime;
use crate::presentation::handlers::{consumption_chart, energy_chart, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Register shared chart options once at startup
    init_chart_runtime();

    // Create repository (infrastructure layer)
    let repository = Arc::new(HttpReadingRepository::new(config.remote.base_url));

    // Create chart controllers (application layer)
    let state = Arc::new(AppState {
        energy_chart: EnergyChartController::new(repository.clone()),
        consumption_chart: ConsumptionChartController::new(repository, config.consumption),
    });

    // Initial mount: both pipelines load concurrently and independently,
    // without gating server startup - a hung remote leaves its chart in
    // the loading state while the HTTP surface stays responsive.
    // Failures are logged and leave the charts loading as well.
    {
        let state = state.clone();
        tokio::spawn(async move {
            tokio::join!(
                state.energy_chart.refresh(),
                state.consumption_chart.refresh()
            );
        });
    }

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/charts/energy", get(energy_chart))
        .route("/charts/consumption", get(consumption_chart))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!("starting energy-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
