use std::fmt;
use std::time::Duration;

/// Which monitor view is loaded. Only decides which panels exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PageKind {
    /// Status panel and uptime counter.
    #[default]
    Main,
    /// Event log only.
    Log,
    /// Status panel, uptime counter and event log together.
    All,
}

/// The panels present on the loaded page. Loops are enabled by what the
/// page contains, not by the page's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub status_panel: bool,
    pub log_container: bool,
}

impl PageLayout {
    pub fn for_page(kind: PageKind) -> Self {
        match kind {
            PageKind::Main => Self {
                status_panel: true,
                log_container: false,
            },
            PageKind::Log => Self {
                status_panel: false,
                log_container: true,
            },
            PageKind::All => Self {
                status_panel: true,
                log_container: true,
            },
        }
    }

    /// Uptime always runs; it feeds the epoch estimate every other view needs.
    pub fn active_loops(&self) -> Vec<LoopKind> {
        let mut loops = Vec::with_capacity(3);
        if self.status_panel {
            loops.push(LoopKind::Status);
        }
        loops.push(LoopKind::Uptime);
        if self.log_container {
            loops.push(LoopKind::Log);
        }
        loops
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopKind {
    Status,
    Uptime,
    Log,
}

impl LoopKind {
    pub fn default_period(self) -> Duration {
        match self {
            LoopKind::Status => Duration::from_millis(1_000),
            LoopKind::Uptime => Duration::from_millis(5_000),
            LoopKind::Log => Duration::from_millis(2_000),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LoopKind::Status => "status",
            LoopKind::Uptime => "uptime",
            LoopKind::Log => "log",
        }
    }
}

impl fmt::Display for LoopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
