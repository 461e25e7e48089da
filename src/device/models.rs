use serde::{Deserialize, Serialize};

/// Device-reported countdown to the next scheduled maintenance run.
/// Some firmware builds only report `total_ms`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceCountdown {
    pub days: Option<u64>,
    pub hours: Option<u64>,
    pub minutes: Option<u64>,
    pub total_ms: Option<u64>,
}

/// One `/status` payload. Held for a single render pass only.
///
/// `last_*` markers are device-relative milliseconds since boot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusSnapshot {
    pub running: bool,
    pub run_request: bool,
    pub cool_down: bool,
    pub cool_down_remaining: Option<u64>,
    pub maintenance: bool,
    pub maintenance_remaining: Option<u64>,
    pub maintenance_countdown: Option<MaintenanceCountdown>,
    /// Reported by older firmware instead of `maintenance_countdown`.
    pub days_until_maintenance: Option<u64>,
    pub start_attempts: Option<u64>,
    pub detected_runs: Option<u64>,
    pub last_start_request: Option<u64>,
    pub last_kill_action: Option<u64>,
    pub last_run_sense_start: Option<u64>,
    pub last_run_sense_end: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UptimeSample {
    pub uptime_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Milliseconds since device boot.
    pub timestamp: u64,
    pub event: String,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogResponse {
    pub uptime_ms: Option<u64>,
    /// Oldest first, as stored on the device.
    pub log: Vec<LogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}
