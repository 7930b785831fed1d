use std::sync::Arc;

use product_service::app::product::{ProductRepository, ProductService};
use product_service::config::{load_config, Config, StorageBackend};
use product_service::infrastructure::logger::Logger;
use product_service::infrastructure::memory::InMemoryProductRepository;
use product_service::{build_router, AppState};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    Logger::init(&config.logging.level);

    info!(backend = ?config.storage.backend, "starting product service");

    let repository = build_repository(&config).await.map_err(|e| {
        error!("failed to initialize record store: {}", e);
        e
    })?;

    let state = AppState::new(ProductService::new(repository));
    let app = build_router(state, config.http.timeout());

    let listener = TcpListener::bind(config.http.address()).await?;
    let addr = listener.local_addr()?;

    info!("product service listening on http://{}", addr);
    info!("   POST   /api/product              - create product");
    info!("   GET    /api/product              - list products");
    info!("   PUT    /api/product/:product_id  - update product");
    info!("   DELETE /api/product/:product_id  - delete product");
    info!("   GET    /health                   - health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("product service stopped");
    Ok(())
}

async fn build_repository(
    config: &Config,
) -> Result<Arc<dyn ProductRepository>, Box<dyn std::error::Error>> {
    match config.storage.backend {
        StorageBackend::Memory => Ok(Arc::new(InMemoryProductRepository::default())),
        #[cfg(feature = "database")]
        StorageBackend::Postgres => {
            use product_service::infrastructure::database::{DatabaseManager, PgProductRepository};

            let manager = DatabaseManager::new(&config.database).await?;
            manager.create_tables().await?;
            Ok(Arc::new(PgProductRepository::new(manager.get_pool().clone())))
        }
        #[cfg(not(feature = "database"))]
        StorageBackend::Postgres => {
            Err("postgres backend requires the `database` feature".into())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
