//! State scoped to one monitoring session (one "page load").

use std::sync::Arc;

use crate::clock::{to_wall_clock, DeviceEpochEstimator, DeviceEpochOffset, WallClock, WallTime};
use crate::sync::ClockSyncDispatcher;

/// Owns the device-epoch estimate and the clock-sync flag. Shared by every
/// polling loop through an `Arc`; updates are whole-value overwrites, so
/// concurrent loops can only race to "last writer wins".
pub struct MonitorSession {
    epoch: DeviceEpochEstimator,
    clock_sync: ClockSyncDispatcher,
}

impl MonitorSession {
    pub fn new(clock: Arc<dyn WallClock>) -> Self {
        Self {
            epoch: DeviceEpochEstimator::new(clock.clone()),
            clock_sync: ClockSyncDispatcher::new(clock),
        }
    }

    pub fn record_uptime(&self, uptime_ms: u64) -> DeviceEpochOffset {
        self.epoch.update(uptime_ms)
    }

    pub fn epoch_offset(&self) -> Option<DeviceEpochOffset> {
        self.epoch.current()
    }

    pub fn to_wall_clock(&self, device_relative_ms: u64) -> WallTime {
        to_wall_clock(&self.epoch, device_relative_ms)
    }

    pub fn clock_sync(&self) -> &ClockSyncDispatcher {
        &self.clock_sync
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn fresh_session_knows_nothing() {
        let session = MonitorSession::new(Arc::new(ManualClock::new(1_000)));
        assert_eq!(session.epoch_offset(), None);
        assert_eq!(session.to_wall_clock(500), WallTime::Unknown);
        assert!(!session.clock_sync().has_synced());
    }

    #[test]
    fn uptime_sample_enables_reconciliation() {
        let session = MonitorSession::new(Arc::new(ManualClock::new(1_700_000_000_000)));
        let offset = session.record_uptime(60_000);
        assert_eq!(offset.boot_ms(), 1_699_999_940_000);
        assert!(session.to_wall_clock(30_000).is_known());
    }
}
