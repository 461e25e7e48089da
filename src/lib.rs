//! Monitor for a standalone generator controller.
//!
//! The controller only knows how long it has been up. This crate polls its
//! HTTP endpoints, keeps an estimate of when it booted so event-log and
//! last-action timestamps can be shown as local wall-clock times, and pushes
//! the local time of day back to the controller once per session.

pub mod clock;
pub mod device;
pub mod poller;
pub mod render;
pub mod session;
pub mod settings;
pub mod sync;
pub mod utils;

use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use clock::SystemClock;
use device::DeviceClient;
use poller::{PageKind, PageLayout, PollingScheduler};
use render::TerminalSink;
use session::MonitorSession;
use settings::MonitorSettings;

/// Reads `RUST_LOG`; `debug` raises the floor from info to debug.
pub fn init_logging(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Polls the controller until Ctrl-C, rendering to the terminal.
pub async fn watch(settings: &MonitorSettings, page: PageKind) -> Result<()> {
    let client = DeviceClient::new(&settings.device_url, settings.request_timeout())?;
    info!("Monitoring {} ({page:?} page)", client.base_url());

    let session = Arc::new(MonitorSession::new(Arc::new(SystemClock)));
    let mut scheduler = PollingScheduler::new(
        Arc::new(client),
        Arc::new(TerminalSink),
        session,
        settings.scheduler_config(),
    );
    scheduler.start(PageLayout::for_page(page))?;

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl-C")?;
    info!("Stopping monitor");
    scheduler.shutdown().await
}
