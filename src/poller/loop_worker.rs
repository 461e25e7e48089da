use std::future::Future;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::time::{Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::device::{DeviceApi, FetchError};
use crate::render::{build_log_lines, RenderSink, StatusView, UptimeView};
use crate::session::MonitorSession;

use super::page::LoopKind;

// Set to false to silence per-cycle logging from the polling loops
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info, log_warn};

/// Everything one polling loop needs; cloned into each spawned task.
pub struct LoopContext<A, S> {
    pub api: Arc<A>,
    pub sink: Arc<S>,
    pub session: Arc<MonitorSession>,
    pub request_timeout: Duration,
}

impl<A, S> Clone for LoopContext<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            sink: Arc::clone(&self.sink),
            session: Arc::clone(&self.session),
            request_timeout: self.request_timeout,
        }
    }
}

/// Idle -> Fetching -> render success or fallback -> Idle, once per period.
///
/// The first tick fires immediately. A cycle runs to completion before the
/// next tick is taken, and ticks missed while a fetch was in flight are
/// skipped, so a slow response can never be overtaken by a newer one.
pub async fn polling_loop<A, S>(
    kind: LoopKind,
    period: Duration,
    ctx: LoopContext<A, S>,
    in_flight: Arc<AtomicBool>,
    cancel_token: CancellationToken,
) where
    A: DeviceApi,
    S: RenderSink,
{
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    log_info!("{kind} loop started (every {}ms)", period.as_millis());

    loop {
        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => break,
            _ = ticker.tick() => {
                in_flight.store(true, Ordering::SeqCst);
                let cancelled = tokio::select! {
                    biased;
                    _ = cancel_token.cancelled() => true,
                    _ = run_cycle(kind, &ctx) => false,
                };
                in_flight.store(false, Ordering::SeqCst);
                if cancelled {
                    break;
                }
            }
        }
    }

    log_info!("{kind} loop shutting down");
}

/// One fetch and the matching render. Never returns an error: failures
/// become diagnostic renders (status, log) or a log line (uptime).
pub async fn run_cycle<A, S>(kind: LoopKind, ctx: &LoopContext<A, S>)
where
    A: DeviceApi,
    S: RenderSink,
{
    match kind {
        LoopKind::Status => status_cycle(ctx).await,
        LoopKind::Uptime => uptime_cycle(ctx).await,
        LoopKind::Log => log_cycle(ctx).await,
    }
}

async fn status_cycle<A: DeviceApi, S: RenderSink>(ctx: &LoopContext<A, S>) {
    match fetch(ctx.request_timeout, ctx.api.status()).await {
        Ok(status) => {
            let view = StatusView::build(&status, &ctx.session);
            ctx.sink.render_status(&view);
            // The write runs detached; its outcome never reaches the status panel.
            if ctx.session.clock_sync().dispatch_once(&ctx.api) {
                log_debug!("clock sync dispatched");
            }
            log_debug!("status rendered (running={})", status.running);
        }
        Err(err) => {
            log_warn!("status fetch failed ({:?}): {err}", err.kind());
            ctx.sink.render_status_failure(&err.to_string());
        }
    }
}

async fn uptime_cycle<A: DeviceApi, S: RenderSink>(ctx: &LoopContext<A, S>) {
    match fetch(ctx.request_timeout, ctx.api.uptime()).await {
        Ok(sample) => {
            let offset = ctx.session.record_uptime(sample.uptime_ms);
            ctx.sink.render_uptime(&UptimeView::new(sample.uptime_ms));
            log_debug!(
                "uptime {}ms, device boot at {}ms",
                sample.uptime_ms,
                offset.boot_ms()
            );
        }
        Err(err) => {
            log_warn!("uptime fetch failed ({:?}): {err}", err.kind());
        }
    }
}

async fn log_cycle<A: DeviceApi, S: RenderSink>(ctx: &LoopContext<A, S>) {
    match fetch(ctx.request_timeout, ctx.api.log()).await {
        Ok(response) => {
            // Same estimator as the uptime loop; there is only one offset per session.
            if let Some(uptime_ms) = response.uptime_ms {
                ctx.session.record_uptime(uptime_ms);
            }
            let lines = build_log_lines(&response.log, &ctx.session);
            ctx.sink.render_log(&lines);
            log_debug!("log rendered ({} entries)", response.log.len());
        }
        Err(err) => {
            log_warn!("log fetch failed ({:?}): {err}", err.kind());
            ctx.sink.render_log_failure(&err.to_string());
        }
    }
}

async fn fetch<T>(
    timeout: Duration,
    request: impl Future<Output = Result<T, FetchError>>,
) -> Result<T, FetchError> {
    match tokio::time::timeout(timeout, request).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::TimedOut(timeout)),
    }
}
