//! One-shot push of the local time of day to the controller.

use chrono::{DateTime, Local, Timelike};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::clock::WallClock;
use crate::device::DeviceApi;

const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

pub fn current_minutes_of_day(now: DateTime<Local>) -> u32 {
    now.hour() * 60 + now.minute()
}

/// Sends the controller our time of day once per session.
///
/// The flag flips before the write is issued, so a failed write is not
/// retried and later status successes never fire again.
pub struct ClockSyncDispatcher {
    clock: Arc<dyn WallClock>,
    sent_sync: AtomicBool,
}

impl ClockSyncDispatcher {
    pub fn new(clock: Arc<dyn WallClock>) -> Self {
        Self {
            clock,
            sent_sync: AtomicBool::new(false),
        }
    }

    pub fn has_synced(&self) -> bool {
        self.sent_sync.load(Ordering::SeqCst)
    }

    /// Called after each successful status fetch. The first call spawns the
    /// write and returns `true`; the task is detached and reports only to the
    /// log. Every later call returns `false`.
    pub fn dispatch_once<A: DeviceApi>(&self, api: &Arc<A>) -> bool {
        if self
            .sent_sync
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return false;
        }

        let minutes = current_minutes_of_day(self.clock.local_now());
        let api = Arc::clone(api);
        tokio::spawn(async move {
            match api.push_clock(minutes).await {
                Ok(()) => log_info!("clock sync sent (current_minutes={minutes})"),
                Err(err) => log_warn!("clock sync failed, not retrying: {err}"),
            }
        });
        true
    }
}
