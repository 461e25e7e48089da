use chrono::{DateTime, Local, TimeZone};
use std::fmt;

use super::epoch::DeviceEpochEstimator;

const DISPLAY_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// A device timestamp mapped onto local wall-clock time, or `Unknown` when no
/// uptime sample has been seen yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallTime {
    Known(DateTime<Local>),
    Unknown,
}

impl WallTime {
    pub fn is_known(&self) -> bool {
        matches!(self, WallTime::Known(_))
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WallTime::Known(at) => write!(f, "{}", at.format(DISPLAY_FORMAT)),
            WallTime::Unknown => f.write_str("Unknown"),
        }
    }
}

/// Reads the estimator's current offset on every call. Callers must not
/// cache the result across renders.
pub fn to_wall_clock(estimator: &DeviceEpochEstimator, device_relative_ms: u64) -> WallTime {
    let Some(offset) = estimator.current() else {
        return WallTime::Unknown;
    };

    match Local.timestamp_millis_opt(offset.wall_ms(device_relative_ms)).single() {
        Some(at) => WallTime::Known(at),
        None => WallTime::Unknown,
    }
}
