use std::fmt;

use crate::clock::WallTime;
use crate::device::{LogEntry, MaintenanceCountdown, StatusSnapshot};
use crate::session::MonitorSession;
use crate::utils::{format_long_duration, format_short_duration, LongDuration, ShortDuration};

pub const NO_EVENTS_PLACEHOLDER: &str = "No events logged yet";

const NONE_LABEL: &str = "None";

/// Everything the status panel shows for one `/status` payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub running: bool,
    pub run_request: bool,
    pub cool_down: bool,
    pub maintenance: bool,
    pub cool_down_remaining: Option<ShortDuration>,
    pub maintenance_remaining: Option<LongDuration>,
    pub maintenance_countdown: Option<LongDuration>,
    pub start_attempts: Option<u64>,
    pub detected_runs: Option<u64>,
    pub last_start_request: Option<WallTime>,
    pub last_kill_action: Option<WallTime>,
    pub last_run_sense_start: Option<WallTime>,
    pub last_run_sense_end: Option<WallTime>,
}

impl StatusView {
    /// Device-relative markers are reconciled against the session's current
    /// epoch estimate at build time, never cached between passes.
    pub fn build(status: &StatusSnapshot, session: &MonitorSession) -> Self {
        let reconcile = |marker: Option<u64>| marker.map(|ms| session.to_wall_clock(ms));

        let maintenance_countdown = match (status.maintenance_countdown, status.days_until_maintenance) {
            (Some(countdown), _) => countdown_view(&countdown),
            (None, Some(days)) => Some(LongDuration {
                days,
                ..LongDuration::default()
            }),
            (None, None) => None,
        };

        Self {
            running: status.running,
            run_request: status.run_request,
            cool_down: status.cool_down,
            maintenance: status.maintenance,
            cool_down_remaining: status.cool_down_remaining.map(format_short_duration),
            maintenance_remaining: status
                .maintenance_remaining
                .map(|ms| format_long_duration(ms / 1000)),
            maintenance_countdown,
            start_attempts: status.start_attempts,
            detected_runs: status.detected_runs,
            last_start_request: reconcile(status.last_start_request),
            last_kill_action: reconcile(status.last_kill_action),
            last_run_sense_start: reconcile(status.last_run_sense_start),
            last_run_sense_end: reconcile(status.last_run_sense_end),
        }
    }

    /// Label/value rows in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Running", yes_no(self.running)),
            ("Run Request", yes_no(self.run_request)),
            ("Cool Down", yes_no(self.cool_down)),
            ("Cool Down Remaining", or_none(self.cool_down_remaining)),
            ("Maintenance", yes_no(self.maintenance)),
            ("Maintenance Remaining", or_none(self.maintenance_remaining)),
            ("Next Maintenance In", or_none(self.maintenance_countdown)),
            ("Start Attempts", or_none(self.start_attempts)),
            ("Detected Runs", or_none(self.detected_runs)),
            ("Last Start Request", or_none(self.last_start_request)),
            ("Last Kill Action", or_none(self.last_kill_action)),
            ("Last Run Sense Start", or_none(self.last_run_sense_start)),
            ("Last Run Sense End", or_none(self.last_run_sense_end)),
        ]
    }
}

/// Visible uptime counter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UptimeView {
    pub uptime_ms: u64,
    pub uptime: LongDuration,
}

impl UptimeView {
    pub fn new(uptime_ms: u64) -> Self {
        Self {
            uptime_ms,
            uptime: format_long_duration(uptime_ms / 1000),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogLine {
    Entry {
        time: WallTime,
        event: String,
        details: String,
    },
    NoEvents,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLine::Entry {
                time,
                event,
                details,
            } => write!(f, "{time}  {event}  {details}"),
            LogLine::NoEvents => f.write_str(NO_EVENTS_PLACEHOLDER),
        }
    }
}

/// Newest entry first. An empty log yields a single placeholder line.
pub fn build_log_lines(entries: &[LogEntry], session: &MonitorSession) -> Vec<LogLine> {
    if entries.is_empty() {
        return vec![LogLine::NoEvents];
    }

    entries
        .iter()
        .rev()
        .map(|entry| LogLine::Entry {
            time: session.to_wall_clock(entry.timestamp),
            event: entry.event.clone(),
            details: entry.details.clone(),
        })
        .collect()
}

/// Prefers the device's own day/hour/minute split; falls back to `total_ms`
/// when none of the parts were reported.
fn countdown_view(countdown: &MaintenanceCountdown) -> Option<LongDuration> {
    match (countdown.days, countdown.hours, countdown.minutes, countdown.total_ms) {
        (None, None, None, Some(total_ms)) => Some(format_long_duration(total_ms / 1000)),
        (None, None, None, None) => None,
        (days, hours, minutes, _) => Some(LongDuration {
            days: days.unwrap_or(0),
            hours: hours.unwrap_or(0),
            minutes: minutes.unwrap_or(0),
        }),
    }
}

fn yes_no(flag: bool) -> String {
    let label = if flag { "Yes" } else { "No" };
    label.to_string()
}

fn or_none<T: fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NONE_LABEL.to_string())
}
