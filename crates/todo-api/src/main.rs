//! todo-api バイナリのエントリポイント

use anyhow::Context;
use domain::TodoStore;
use infrastructure::{DynamoDbClient, DynamoTodoStore, InMemoryTodoStore};
use shared::{Config, StoreBackend};
use std::sync::Arc;
use todo_api::{app_with_state, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;
    shared::init_tracing(config.log_format).map_err(|e| anyhow::anyhow!(e))?;

    let store: Arc<dyn TodoStore> = match config.store_backend {
        StoreBackend::Memory => Arc::new(InMemoryTodoStore::new()),
        StoreBackend::DynamoDb => {
            let db = DynamoDbClient::new(&config).await;
            tracing::info!(table = db.table_name(), "using DynamoDB store");
            Arc::new(DynamoTodoStore::new(db))
        }
    };

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, backend = ?config.store_backend, "server starting");

    axum::serve(listener, app_with_state(AppState::new(store)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
