use anyhow::Context;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use shift_logger::shared::config::ServerConfig;
use shift_logger::shared::logging::init_tracing;
use shift_logger::shell;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    init_tracing("info");

    let shutdown = CancellationToken::new();
    let state = shell::build_state(&config, shutdown.clone())
        .await
        .context("failed to open the store")?;

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("Shift logger API listening on http://{}", config.bind_addr);

    let signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("shutting down");
                signal.cancel();
            }
            Err(err) => warn!(error = %err, "failed to listen for ctrl-c"),
        }
    });

    shell::serve(listener, state, shutdown).await?;
    Ok(())
}
