//! Typed access to the controller's HTTP endpoints.

pub mod client;
pub mod error;
pub mod models;

pub use client::DeviceClient;
pub use error::{FetchError, FetchErrorKind};
pub use models::{
    LogEntry, LogResponse, MaintenanceCountdown, PingResponse, StatusSnapshot, UptimeSample,
};

use std::future::Future;

/// The periodic-poll surface of the controller.
///
/// The polling loops and the clock-sync dispatcher only talk to the device
/// through this trait, so they can run against [`DeviceClient`] or a fake.
pub trait DeviceApi: Send + Sync + 'static {
    /// `GET /status`
    fn status(&self) -> impl Future<Output = Result<StatusSnapshot, FetchError>> + Send;

    /// `GET /uptime`
    fn uptime(&self) -> impl Future<Output = Result<UptimeSample, FetchError>> + Send;

    /// `GET /log`, oldest entry first.
    fn log(&self) -> impl Future<Output = Result<LogResponse, FetchError>> + Send;

    /// `POST /config/update` with `current_minutes=<minutes of day>`.
    /// The response body is ignored.
    fn push_clock(&self, current_minutes: u32)
        -> impl Future<Output = Result<(), FetchError>> + Send;
}
