//! # NZ Walks Server
//!
//! Main entry point for the NZ Walks API.

use nzwalks_config::ConfigLoader;
use nzwalks_core::{NzWalksError, NzWalksResult};
use nzwalks_repository::DatabasePoolInterface;
use nzwalks_rest::create_router;
use nzwalks_server::{
    di::build_module,
    startup::{init_logging, print_startup_info, shutdown_signal},
};
use shaku::HasComponent;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config_loader = match ConfigLoader::from_default_location() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config_loader).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config_loader: ConfigLoader) -> NzWalksResult<()> {
    let config = config_loader.get();
    init_logging(&config.logging);

    info!("Starting NZ Walks API...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    // Build DI module around the connection pool
    let module = build_module(&config.database).await?;
    let db_pool: Arc<dyn DatabasePoolInterface> = module.resolve();

    if config.database.run_migrations {
        db_pool.run_migrations().await?;
    }

    let router = create_router(module.as_ref(), &config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| NzWalksError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    print_startup_info(&config.server);

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| NzWalksError::Internal(format!("REST server error: {}", e)));

    db_pool.close().await;
    info!("Server shutdown complete");
    served
}
