//! Cooperative shutdown token for the CPU watch task.
//!
//! One [`ShutdownTrigger`] (held by the signal waiter) and one [`Shutdown`]
//! (held by the poller) share a `watch` channel.  Triggering is write-once:
//! [`ShutdownTrigger::trigger`] consumes the handle.

use std::io;
use tokio::sync::watch;

/// Create a connected trigger / token pair.
pub fn channel() -> (ShutdownTrigger, Shutdown) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTrigger(tx), Shutdown(rx))
}

/// Writing half: requests shutdown.
#[derive(Debug)]
pub struct ShutdownTrigger(watch::Sender<bool>);

impl ShutdownTrigger {
    pub fn trigger(self) {
        // the poller may already be gone
        let _ = self.0.send(true);
    }
}

/// Reading half, passed into the background task.
///
/// Dropping the trigger without calling [`ShutdownTrigger::trigger`] also
/// resolves [`Shutdown::triggered`].
#[derive(Debug)]
pub struct Shutdown(watch::Receiver<bool>);

impl Shutdown {
    pub fn is_triggered(&self) -> bool {
        *self.0.borrow()
    }

    /// Resolve once shutdown has been requested.
    pub async fn triggered(&mut self) {
        let _ = self.0.wait_for(|stop| *stop).await;
    }
}

/// Wait for SIGINT or SIGTERM (Ctrl+C only on non-Unix targets).
///
/// Handlers are installed when this is called, not when the future is
/// first polled.
#[cfg(unix)]
pub fn termination() -> io::Result<impl std::future::Future<Output = ()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    Ok(async move {
        tokio::select! {
            _ = interrupt.recv() => tracing::debug!("SIGINT received"),
            _ = terminate.recv() => tracing::debug!("SIGTERM received"),
        }
    })
}

#[cfg(not(unix))]
pub fn termination() -> io::Result<impl std::future::Future<Output = ()>> {
    Ok(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn trigger_is_observed() {
        let (trigger, mut shutdown) = channel();
        assert!(!shutdown.is_triggered());
        trigger.trigger();
        shutdown.triggered().await;
        assert!(shutdown.is_triggered());
    }

    #[tokio::test]
    async fn dropped_trigger_releases_waiter() {
        let (trigger, mut shutdown) = channel();
        drop(trigger);
        shutdown.triggered().await;
        assert!(!shutdown.is_triggered());
    }
}
