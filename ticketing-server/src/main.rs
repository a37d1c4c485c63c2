use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ticketing_server::config::ServerConfig;
use ticketing_server::network::{NetworkDefinition, sample_system};
use ticketing_server::reservation::ReservationSystem;
use ticketing_server::web::{AppState, create_router};

const DEFAULT_FILTER: &str = "ticketing_server=info,tower_http=info";

/// Build the engine from the configured network file, or the sample network.
fn load_system(config: &ServerConfig) -> Result<ReservationSystem, Box<dyn std::error::Error>> {
    match &config.network_path {
        Some(path) => {
            let definition = NetworkDefinition::load(path)?;
            let mut system = ReservationSystem::new();
            let (routes, services) = definition.install(&mut system)?;
            info!(path = %path.display(), routes, services, "loaded network");
            Ok(system)
        }
        None => {
            info!("no network file configured, using sample network");
            Ok(sample_system()?)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let system = match load_system(&config) {
        Ok(system) => system,
        Err(e) => {
            error!("failed to load network: {e}");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(system);
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!("Ticketing server listening on http://{}", config.addr);
    info!("API Endpoints:");
    info!("  GET  /health");
    info!("  GET  /services");
    info!("  POST /reservations");
    info!("  GET  /bookings[/{{id}}]");
    info!("  GET  /services/{{id}}/boarding?station=&date=");
    info!("  GET  /services/{{id}}/alighting?station=&date=");
    info!("  GET  /services/{{id}}/between?from=&to=&date=");
    info!("  GET  /services/{{id}}/seats/{{carriage}}/{{seat}}?date=");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    info!("shut down");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
