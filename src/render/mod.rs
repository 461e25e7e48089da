//! View models built from device payloads, and the sinks that display them.

pub mod sink;
pub mod view;

pub use sink::{RenderSink, TerminalSink};
pub use view::{build_log_lines, LogLine, StatusView, UptimeView, NO_EVENTS_PLACEHOLDER};
