use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};

use crate::poller::SchedulerConfig;

pub const DEVICE_URL_ENV: &str = "GENMON_DEVICE_URL";
pub const DEBUG_ENV: &str = "GENMON_DEBUG";

/// Controller access point address when running as its own Wi-Fi AP.
const DEFAULT_DEVICE_URL: &str = "http://192.168.4.1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorSettings {
    pub device_url: String,
    pub status_period_ms: u64,
    pub uptime_period_ms: u64,
    pub log_period_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            device_url: DEFAULT_DEVICE_URL.into(),
            status_period_ms: 1_000,
            uptime_period_ms: 5_000,
            log_period_ms: 2_000,
            request_timeout_ms: 3_000,
        }
    }
}

impl MonitorSettings {
    /// Reads `path` if it exists, otherwise starts from defaults. A file that
    /// exists but does not parse is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) if path.exists() => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read settings from {}", path.display()))?;
                serde_json::from_str(&contents)
                    .with_context(|| format!("Failed to parse settings in {}", path.display()))?
            }
            _ => Self::default(),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(std::env::var(DEVICE_URL_ENV).ok());
    }

    fn apply_overrides(&mut self, device_url: Option<String>) {
        if let Some(url) = device_url.filter(|url| !url.trim().is_empty()) {
            self.device_url = url.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        let periods = [
            ("status_period_ms", self.status_period_ms),
            ("uptime_period_ms", self.uptime_period_ms),
            ("log_period_ms", self.log_period_ms),
            ("request_timeout_ms", self.request_timeout_ms),
        ];
        for (name, value) in periods {
            if value == 0 {
                bail!("{name} must be greater than zero");
            }
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn scheduler_config(&self) -> SchedulerConfig {
        SchedulerConfig {
            status_period: Duration::from_millis(self.status_period_ms),
            uptime_period: Duration::from_millis(self.uptime_period_ms),
            log_period: Duration::from_millis(self.log_period_ms),
            request_timeout: self.request_timeout(),
        }
    }
}

/// `1` or `true` (any case) turns on debug logging.
pub fn debug_enabled() -> bool {
    parse_flag(std::env::var(DEBUG_ENV).ok().as_deref())
}

fn parse_flag(value: Option<&str>) -> bool {
    value
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
