//! # Waypoint Account Service Server
//!
//! Main entry point for the Waypoint account service: loads configuration,
//! connects the database and cache pools, wires the dependency injection
//! module, and serves the REST API.

use axum::routing::get;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tokio::signal;
use tracing::{error, info};
use waypoint_config::ConfigLoader;
use waypoint_core::{WaypointError, WaypointResult};
use waypoint_repository::{create_pool, DatabasePoolInterface};
use waypoint_rest::create_router;
use waypoint_service::cache::metrics;

mod di;

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    info!("Starting Waypoint Account Service...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> WaypointResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    // Install the Prometheus recorder before anything records a counter
    let metrics_handle = if config.observability.metrics_enabled {
        let handle = install_metrics_recorder()?;
        metrics::register_metrics();
        Some(handle)
    } else {
        None
    };

    // Create database pool and run migrations
    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    // Build DI module - centralized dependency injection
    let module = di::build_app_module(&db_pool, &config.redis, &config.cache)?;

    // Create REST router
    let mut router = create_router(module.as_ref(), &config.server);

    if let Some(handle) = metrics_handle {
        router = router.route(
            config.observability.metrics_path.as_str(),
            get(move || std::future::ready(handle.render())),
        );
    }

    // Start REST server
    let rest_addr = config.server.rest_addr();
    info!("Starting REST server on http://{}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr)
        .await
        .map_err(|e| WaypointError::Internal(format!("Failed to bind REST: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| WaypointError::Internal(format!("REST server error: {}", e)))?;

    db_pool.close().await;

    info!("Server shutdown complete");
    Ok(())
}

fn install_metrics_recorder() -> WaypointResult<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| WaypointError::Configuration(format!("Failed to install metrics recorder: {}", e)))
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,waypoint=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
