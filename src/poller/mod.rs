//! The three device polling loops and the scheduler that owns them.

pub mod loop_worker;
pub mod page;
pub mod scheduler;

pub use page::{LoopKind, PageKind, PageLayout};
pub use scheduler::{PollingScheduler, SchedulerConfig};
