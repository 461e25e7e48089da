use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::{bail, Context, Result};
use log::info;
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::device::DeviceApi;
use crate::render::RenderSink;
use crate::session::MonitorSession;

use super::loop_worker::{polling_loop, LoopContext};
use super::page::{LoopKind, PageLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub status_period: Duration,
    pub uptime_period: Duration,
    pub log_period: Duration,
    pub request_timeout: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            status_period: LoopKind::Status.default_period(),
            uptime_period: LoopKind::Uptime.default_period(),
            log_period: LoopKind::Log.default_period(),
            request_timeout: Duration::from_millis(3_000),
        }
    }
}

impl SchedulerConfig {
    pub fn period(&self, kind: LoopKind) -> Duration {
        match kind {
            LoopKind::Status => self.status_period,
            LoopKind::Uptime => self.uptime_period,
            LoopKind::Log => self.log_period,
        }
    }
}

struct RunningLoop {
    kind: LoopKind,
    handle: JoinHandle<()>,
}

/// Owns the polling loops for one session.
///
/// `start` spawns the loops the page layout calls for; `shutdown` cancels
/// and joins them, which is the equivalent of unloading the page.
pub struct PollingScheduler<A, S> {
    api: Arc<A>,
    sink: Arc<S>,
    session: Arc<MonitorSession>,
    config: SchedulerConfig,
    loops: Vec<RunningLoop>,
    in_flight: HashMap<LoopKind, Arc<AtomicBool>>,
    cancel_token: Option<CancellationToken>,
}

impl<A, S> PollingScheduler<A, S>
where
    A: DeviceApi,
    S: RenderSink,
{
    pub fn new(
        api: Arc<A>,
        sink: Arc<S>,
        session: Arc<MonitorSession>,
        config: SchedulerConfig,
    ) -> Self {
        Self {
            api,
            sink,
            session,
            config,
            loops: Vec::new(),
            in_flight: HashMap::new(),
            cancel_token: None,
        }
    }

    pub fn start(&mut self, layout: PageLayout) -> Result<()> {
        if self.cancel_token.is_some() {
            bail!("polling already active");
        }

        let cancel_token = CancellationToken::new();
        let ctx = LoopContext {
            api: Arc::clone(&self.api),
            sink: Arc::clone(&self.sink),
            session: Arc::clone(&self.session),
            request_timeout: self.config.request_timeout,
        };

        for kind in layout.active_loops() {
            let in_flight = Arc::new(AtomicBool::new(false));
            let handle = tokio::spawn(polling_loop(
                kind,
                self.config.period(kind),
                ctx.clone(),
                Arc::clone(&in_flight),
                cancel_token.clone(),
            ));
            self.in_flight.insert(kind, in_flight);
            self.loops.push(RunningLoop { kind, handle });
        }

        info!(
            "polling started: {}",
            self.running_loops()
                .iter()
                .map(|kind| kind.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        self.cancel_token = Some(cancel_token);
        Ok(())
    }

    pub fn running_loops(&self) -> Vec<LoopKind> {
        self.loops.iter().map(|running| running.kind).collect()
    }

    /// True while the given loop is waiting on the device.
    pub fn is_in_flight(&self, kind: LoopKind) -> bool {
        self.in_flight
            .get(&kind)
            .map(|flag| flag.load(Ordering::SeqCst))
            .unwrap_or(false)
    }

    pub fn session(&self) -> &Arc<MonitorSession> {
        &self.session
    }

    pub async fn shutdown(&mut self) -> Result<()> {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }

        for running in self.loops.drain(..) {
            running
                .handle
                .await
                .with_context(|| format!("{} loop task failed to join", running.kind))?;
        }
        self.in_flight.clear();
        Ok(())
    }
}
