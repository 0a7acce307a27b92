// Composition root for the API.
//
// Responsibilities
// - Pick the store from configuration.
// - Wire the store into the worker and shift services.
// - Serve the router until the shutdown token fires.

pub mod http;
pub mod responses;
pub mod state;

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::shared::config::ServerConfig;
use crate::shared::core::errors::StoreError;
use crate::shared::infrastructure::store::in_memory::InMemoryStore;
use crate::shared::infrastructure::store::sqlite::SqliteStore;
use crate::shell::state::AppState;

/// Builds the state over the configured store.
pub async fn build_state(
    config: &ServerConfig,
    cancel: CancellationToken,
) -> Result<AppState, StoreError> {
    match &config.database_url {
        Some(url) => {
            let store = SqliteStore::connect(url).await?;
            Ok(AppState::new(Arc::new(store), cancel))
        }
        None => {
            info!("no DATABASE_URL set, using the in-memory store");
            Ok(AppState::new(Arc::new(InMemoryStore::new()), cancel))
        }
    }
}

/// Serves on `listener` until `shutdown` is cancelled.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    let app = http::router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
}
