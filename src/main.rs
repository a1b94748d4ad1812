//! surfsup - a read-only climate observation API
//!
//! This is the main entry point for the surfsup application.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use surfsup::handlers::heartbeat::mark_started;
use surfsup::{
    build_router, init_tracing, log_dataset_stats, AppState, Config, Result, SqliteStore,
    SurfsUpError,
};

fn main() -> Result<()> {
    let config = Config::load()?;
    config.validate()?;

    init_tracing(&config.log_level);

    let mut runtime = tokio::runtime::Builder::new_multi_thread();
    if let Some(workers) = config.server.workers {
        runtime.worker_threads(workers);
    }
    let runtime = runtime.enable_all().build()?;

    runtime.block_on(serve(config))
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting surfsup v{}", env!("CARGO_PKG_VERSION"));
    mark_started();

    let dataset_path = config.data.file_path.clone();
    info!("Opening dataset: {:?}", dataset_path);

    let store = SqliteStore::open(&dataset_path, config.data.max_connections)
        .await
        .map_err(|e| {
            error!("Failed to open dataset: {}", e);
            e
        })?;

    let state = AppState::new_shared(config.clone(), Arc::new(store.clone()));

    let summary = state.validate().await.map_err(|e| {
        error!("Dataset is not usable: {}", e);
        e
    })?;
    log_dataset_stats(&dataset_path, &summary);

    let app = build_router(state);

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| SurfsUpError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| SurfsUpError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SurfsUpError::Server {
            message: format!("Server error: {}", e),
        })?;

    store.close().await;
    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
