//! Continuous CPU watch.
//!
//! The poller prints one reading immediately, then one per interval tick
//! until its [`Shutdown`] token fires.  Each query runs on the blocking
//! pool while the poller task waits for it, so the runtime keeps serving
//! signals meanwhile.  Ticks are handled one after another: at most one
//! query is ever in flight, and ticks missed while a query runs are
//! skipped rather than queued.

use crate::display::failure_line;
use crate::shutdown::{self, Shutdown};
use glance_config::WatchConfig;
use glance_core::{CpuSample, GlanceError, Result};
use glance_renderer::cpu_readout;
use glance_system::{MetricsProvider, MINIMUM_WINDOW};
use glance_theme::Theme;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Summary returned when the poller stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PollReport {
    /// Readings (or error lines) actually written.
    pub displays: u64,
    /// Readings dropped because shutdown arrived while they were taken.
    pub discarded: u64,
}

pub struct CpuPoller<P, W> {
    provider: Arc<Mutex<P>>,
    out:      W,
    theme:    Theme,
    interval: Duration,
    per_core: bool,
    report:   PollReport,
}

impl<P, W> CpuPoller<P, W>
where
    P: MetricsProvider + Send + 'static,
    W: Write,
{
    pub fn new(provider: P, out: W, theme: Theme, config: &WatchConfig) -> Self {
        Self {
            provider: Arc::new(Mutex::new(provider)),
            out,
            theme,
            interval: Duration::from_millis(config.interval_ms),
            per_core: config.per_core,
            report: PollReport::default(),
        }
    }

    /// Poll until `shutdown` fires.  Only write errors end the loop early.
    ///
    /// A token that has already fired stops the poller before anything is
    /// printed or queried.
    pub async fn run(mut self, mut shutdown: Shutdown) -> io::Result<PollReport> {
        if shutdown.is_triggered() {
            return Ok(self.report);
        }

        debug!("CPU watch running every {:?}", self.interval);
        self.out.write_all(b"Press Ctrl+C to exit...\n")?;
        self.out.flush()?;

        // The first reading has no earlier refresh to diff against.
        self.poll_once(MINIMUM_WINDOW, &shutdown).await?;

        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.triggered() => break,
                _ = ticker.tick() => self.poll_once(Duration::ZERO, &shutdown).await?,
            }
        }

        info!(
            "CPU watch stopped after {} readings ({} discarded)",
            self.report.displays, self.report.discarded
        );
        Ok(self.report)
    }

    async fn poll_once(&mut self, window: Duration, shutdown: &Shutdown) -> io::Result<()> {
        let provider = Arc::clone(&self.provider);
        let block = match query(provider, window, self.per_core).await {
            Ok(sample) => cpu_readout(&sample, &self.theme),
            Err(e) => {
                debug!("CPU query failed: {e}");
                failure_line("CPU usage", &e)
            }
        };

        if shutdown.is_triggered() {
            self.report.discarded += 1;
            return Ok(());
        }

        self.out.write_all(block.as_bytes())?;
        self.out.flush()?;
        self.report.displays += 1;
        Ok(())
    }
}

/// Take one CPU sample on the blocking pool.
async fn query<P>(provider: Arc<Mutex<P>>, window: Duration, per_core: bool) -> Result<CpuSample>
where
    P: MetricsProvider + Send + 'static,
{
    task::spawn_blocking(move || {
        let mut provider = provider
            .lock()
            .map_err(|_| GlanceError::provider("CPU usage", "provider lock poisoned"))?;
        provider.sample_cpu(window, per_core)
    })
    .await
    .map_err(|e| GlanceError::provider("CPU usage", e.to_string()))?
}

/// Run the CPU watch on stdout until SIGINT / SIGTERM.
///
/// Builds its own single-threaded runtime: the poller task runs in the
/// background while the foreground waits for the termination signal.
pub fn watch_cpu<P>(provider: P, theme: Theme, config: &WatchConfig) -> anyhow::Result<PollReport>
where
    P: MetricsProvider + Send + 'static,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let poller = CpuPoller::new(provider, io::stdout(), theme, config);

    runtime.block_on(supervise(poller))
}

async fn supervise<P, W>(poller: CpuPoller<P, W>) -> anyhow::Result<PollReport>
where
    P: MetricsProvider + Send + 'static,
    W: Write + Send + 'static,
{
    let termination = shutdown::termination()?;
    let (trigger, token) = shutdown::channel();
    let mut task = tokio::spawn(poller.run(token));

    tokio::select! {
        _ = termination => {
            info!("Termination requested; stopping CPU watch");
            trigger.trigger();
        }
        finished = &mut task => return Ok(finished??),
    }

    Ok(task.await??)
}
