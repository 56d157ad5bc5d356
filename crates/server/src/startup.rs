use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use service::{storage::JsonFileStore, Registry};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load the persisted document and assemble the router around it.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<(Router, Arc<Registry>)> {
    common::env::ensure_data_dir(&cfg.storage.data_file).await?;
    let store = Arc::new(JsonFileStore::new(&cfg.storage.data_file));
    let registry = Registry::open(store).await;
    let state = AppState { registry: Arc::clone(&registry) };
    Ok((routes::build_router(state, build_cors()), registry))
}

/// Public entry: build the app and serve until Ctrl+C or SIGTERM, then save
/// the document one last time.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let (app, registry) = build_app(&cfg).await?;

    let listener = TcpListener::bind(cfg.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, data_file = %cfg.storage.data_file.display(), "starting server");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    persist_on_exit(&registry).await;
    served?;
    Ok(())
}

async fn persist_on_exit(registry: &Registry) {
    match registry.flush().await {
        Ok(()) => info!(event = "final_save", "document saved on shutdown"),
        Err(e) => error!(event = "final_save_failed", error = %e, "could not save document on shutdown"),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(event = "shutdown_signal", "shutting down");
}
