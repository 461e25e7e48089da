use std::fmt;

const SECS_PER_DAY: u64 = 86_400;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_MINUTE: u64 = 60;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

/// Day/hour/minute breakdown used for maintenance countdowns and uptime.
/// Leftover seconds are dropped, never rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongDuration {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

/// Minute/second breakdown used for the cool-down countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortDuration {
    pub minutes: u64,
    pub seconds: u64,
}

pub fn format_long_duration(total_seconds: u64) -> LongDuration {
    LongDuration {
        days: total_seconds / SECS_PER_DAY,
        hours: (total_seconds % SECS_PER_DAY) / SECS_PER_HOUR,
        minutes: (total_seconds % SECS_PER_HOUR) / SECS_PER_MINUTE,
    }
}

pub fn format_short_duration(total_ms: u64) -> ShortDuration {
    ShortDuration {
        minutes: total_ms / MS_PER_MINUTE,
        seconds: (total_ms % MS_PER_MINUTE) / MS_PER_SECOND,
    }
}

impl fmt::Display for LongDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d {}h {}m", self.days, self.hours, self.minutes)
    }
}

impl fmt::Display for ShortDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m {}s", self.minutes, self.seconds)
    }
}
