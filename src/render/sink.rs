use std::io::{self, Write};

use super::view::{LogLine, StatusView, UptimeView};

/// Where the polling loops hand their results. Implementations must be
/// cheap; they run inline on the loop that produced the data.
pub trait RenderSink: Send + Sync + 'static {
    fn render_status(&self, view: &StatusView);

    /// Diagnostic fallback when a status fetch fails.
    fn render_status_failure(&self, message: &str);

    fn render_uptime(&self, view: &UptimeView);

    fn render_log(&self, lines: &[LogLine]);

    /// Diagnostic fallback when a log fetch fails.
    fn render_log_failure(&self, message: &str);
}

/// Plain stdout rendering for the `genmon watch` command.
#[derive(Debug, Default)]
pub struct TerminalSink;

impl TerminalSink {
    fn write_block(&self, title: &str, body: &[String]) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let _ = writeln!(out, "== {title} ==");
        for line in body {
            let _ = writeln!(out, "{line}");
        }
        let _ = out.flush();
    }
}

impl RenderSink for TerminalSink {
    fn render_status(&self, view: &StatusView) {
        let body: Vec<String> = view
            .rows()
            .into_iter()
            .map(|(label, value)| format!("{label:<22}{value}"))
            .collect();
        self.write_block("Status", &body);
    }

    fn render_status_failure(&self, message: &str) {
        self.write_block("Status", &[format!("Error loading status: {message}")]);
    }

    fn render_uptime(&self, view: &UptimeView) {
        self.write_block("Uptime", &[view.uptime.to_string()]);
    }

    fn render_log(&self, lines: &[LogLine]) {
        let body: Vec<String> = lines.iter().map(ToString::to_string).collect();
        self.write_block("Event Log", &body);
    }

    fn render_log_failure(&self, message: &str) {
        self.write_block("Event Log", &[format!("Error loading log: {message}")]);
    }
}
