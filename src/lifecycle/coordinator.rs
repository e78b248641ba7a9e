//! Background task that turns OS signals into cancellation and exit.

use std::future::Future;
use std::io;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::{ShutdownSignal, SignalListener};

/// Notice printed to stdout when shutdown starts, whatever the verbosity.
pub const SHUTDOWN_NOTICE: &str = "Shutting down gracefully...";

/// Exit status after a signal-driven shutdown.
pub const SHUTDOWN_EXIT_CODE: i32 = 0;

/// How the post-signal wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainOutcome {
    /// The service returned before the grace period ran out.
    ServiceStopped,
    /// The grace period ran out first.
    GraceElapsed,
}

/// Waits for SIGINT/SIGTERM, fires the cancellation handle, gives the
/// service `grace` to wind down, then exits the process.
#[derive(Debug)]
pub struct ShutdownCoordinator {
    shutdown: Shutdown,
    stopped: Shutdown,
    grace: Duration,
}

impl ShutdownCoordinator {
    /// `shutdown` is fired on the first signal; `stopped` is fired by the
    /// launcher once the service has returned.
    pub fn new(shutdown: Shutdown, stopped: Shutdown, grace: Duration) -> Self {
        Self {
            shutdown,
            stopped,
            grace,
        }
    }

    /// Register the signal handlers, then run on its own task.
    ///
    /// Handlers are installed before this returns, so a signal arriving
    /// while the task is still unscheduled is not lost.
    pub fn spawn(self) -> io::Result<JoinHandle<()>> {
        let listener = SignalListener::register()?;
        Ok(tokio::spawn(self.run(listener)))
    }

    async fn run(self, mut listener: SignalListener) {
        tracing::info!(
            grace_period_ms = self.grace.as_millis() as u64,
            "Waiting for shutdown signal"
        );

        self.cancel_on(listener.recv()).await;

        match self.drain().await {
            DrainOutcome::ServiceStopped => {
                tracing::debug!("Service stopped within grace period");
            }
            DrainOutcome::GraceElapsed => {
                tracing::warn!(
                    grace_period_ms = self.grace.as_millis() as u64,
                    "Grace period elapsed, exiting"
                );
            }
        }
        std::process::exit(SHUTDOWN_EXIT_CODE);
    }

    /// Wait for the service to report it stopped, at most `grace`.
    pub async fn drain(&self) -> DrainOutcome {
        drain(self.stopped.cancelled(), self.grace).await
    }

    /// Wait for `signal`, announce the shutdown and fire the handle.
    pub async fn cancel_on<F>(&self, signal: F) -> ShutdownSignal
    where
        F: Future<Output = ShutdownSignal>,
    {
        let signal = signal.await;

        println!("\n{SHUTDOWN_NOTICE}");
        tracing::info!(signal = %signal, "Shutdown signal received");

        if !self.shutdown.trigger() {
            tracing::debug!("Shutdown already in progress");
        }
        signal
    }
}

/// Race `stopped` against `grace`. A zero grace never waits.
pub async fn drain<F>(stopped: F, grace: Duration) -> DrainOutcome
where
    F: Future<Output = ()>,
{
    if grace.is_zero() {
        return DrainOutcome::GraceElapsed;
    }
    tokio::select! {
        _ = stopped => DrainOutcome::ServiceStopped,
        _ = tokio::time::sleep(grace) => DrainOutcome::GraceElapsed,
    }
}
