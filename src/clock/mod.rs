//! Device time: mapping the controller's since-boot counter onto wall-clock time.

pub mod epoch;
pub mod reconcile;
pub mod source;

pub use epoch::{DeviceEpochEstimator, DeviceEpochOffset};
pub use reconcile::{to_wall_clock, WallTime};
pub use source::{ManualClock, SystemClock, WallClock};
