use std::sync::Arc;

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use shift_logger::console::client::HttpApiClient;
use shift_logger::console::terminal::{Prompt, StdTerminal};
use shift_logger::console::ui::ShiftLoggerUi;
use shift_logger::shared::config::ConsoleConfig;
use shift_logger::shared::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env()?;
    init_tracing("off");

    let cancel = CancellationToken::new();
    let client = HttpApiClient::new(&config.api_url, config.request_timeout, cancel.clone())?;
    info!(api_url = %config.api_url, "console started");

    let signal = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => signal.cancel(),
            Err(err) => warn!(error = %err, "failed to listen for ctrl-c"),
        }
    });

    let terminal = StdTerminal::new().context("failed to start reading stdin")?;
    let mut ui = ShiftLoggerUi::new(Arc::new(client), Prompt::new(terminal, cancel));
    ui.run().await?;
    Ok(())
}
