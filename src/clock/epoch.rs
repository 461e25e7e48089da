use std::sync::{Arc, RwLock};

use super::source::WallClock;

/// Wall-clock instant of device boot, in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceEpochOffset(i64);

impl DeviceEpochOffset {
    pub fn from_boot_ms(boot_ms: i64) -> Self {
        Self(boot_ms)
    }

    pub fn boot_ms(self) -> i64 {
        self.0
    }

    /// Absolute wall-clock milliseconds for a since-boot device timestamp.
    pub fn wall_ms(self, device_relative_ms: u64) -> i64 {
        self.0.saturating_add(clamp_ms(device_relative_ms))
    }
}

/// Best current estimate of when the device booted, in browser time.
///
/// Every sample overwrites the estimate with `now - uptime`; nothing is
/// smoothed or checked for monotonicity, so a device reboot (uptime going
/// backwards) or a jump in the local clock is absorbed on the next sample.
pub struct DeviceEpochEstimator {
    clock: Arc<dyn WallClock>,
    offset: RwLock<Option<DeviceEpochOffset>>,
}

impl DeviceEpochEstimator {
    pub fn new(clock: Arc<dyn WallClock>) -> Self {
        Self {
            clock,
            offset: RwLock::new(None),
        }
    }

    pub fn update(&self, uptime_ms: u64) -> DeviceEpochOffset {
        let offset = DeviceEpochOffset(self.clock.now_ms().saturating_sub(clamp_ms(uptime_ms)));
        let mut guard = match self.offset.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(offset);
        offset
    }

    /// `None` until the first uptime sample has been applied.
    pub fn current(&self) -> Option<DeviceEpochOffset> {
        match self.offset.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

fn clamp_ms(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn estimator_at(now_ms: i64) -> (Arc<ManualClock>, DeviceEpochEstimator) {
        let clock = Arc::new(ManualClock::new(now_ms));
        let estimator = DeviceEpochEstimator::new(clock.clone());
        (clock, estimator)
    }

    #[test]
    fn uninitialized_until_first_sample() {
        let (_, estimator) = estimator_at(10_000);
        assert_eq!(estimator.current(), None);
    }

    #[test]
    fn update_subtracts_uptime_from_now() {
        let (_, estimator) = estimator_at(1_000_000);
        let offset = estimator.update(250_000);
        assert_eq!(offset.boot_ms(), 750_000);
        assert_eq!(estimator.current(), Some(offset));
    }

    #[test]
    fn each_sample_replaces_the_previous_estimate() {
        let (clock, estimator) = estimator_at(1_000_000);
        estimator.update(100_000);
        clock.advance(5_000);
        // Device reported 5.2s more uptime than the 5s that passed locally.
        let offset = estimator.update(105_200);
        assert_eq!(offset.boot_ms(), 899_800);
    }

    #[test]
    fn reboot_is_accepted_without_complaint() {
        let (clock, estimator) = estimator_at(1_000_000);
        estimator.update(900_000);
        clock.advance(5_000);
        let offset = estimator.update(2_000);
        assert_eq!(offset.boot_ms(), 1_003_000);
    }

    #[test]
    fn wall_ms_adds_device_relative_time() {
        let offset = DeviceEpochOffset::from_boot_ms(1_000);
        assert_eq!(offset.wall_ms(2_500), 3_500);
    }
}
