pub mod duration;
pub mod logging;

pub use duration::{format_long_duration, format_short_duration, LongDuration, ShortDuration};
