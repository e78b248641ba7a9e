//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration into the shared handle
//! - Start the shutdown coordinator in the background
//! - Run the service and report how it ended
//!
//! # Design Decisions
//! - Fail fast: any startup error is returned before the service starts
//! - Signal handlers are armed before the service runs
//! - No process exits in here; `main` owns termination
//! - Logging is initialized by the caller before `launch`

use crate::cli::Args;
use crate::config::{load_into, SharedConfig};
use crate::error::LaunchError;
use crate::lifecycle::coordinator::ShutdownCoordinator;
use crate::lifecycle::shutdown::Shutdown;
use crate::service::{Service, ServiceContext};

/// Drives one service through a single process lifetime.
pub struct Launcher<S> {
    service: S,
    config: SharedConfig,
}

impl<S: Service> Launcher<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            config: SharedConfig::default(),
        }
    }

    /// The configuration handle the service will read from.
    pub fn config(&self) -> &SharedConfig {
        &self.config
    }

    /// Load config, arm the signal handler, then run the service to
    /// completion.
    pub async fn launch(&self, args: &Args) -> Result<(), LaunchError> {
        load_into(&self.config, &args.config)?;
        let config = self.config.get();

        tracing::info!(
            path = %args.config.display(),
            bind_address = %config.listener.bind_address,
            "Configuration loaded"
        );

        let shutdown = Shutdown::new();
        let stopped = Shutdown::new();
        let coordinator = ShutdownCoordinator::new(
            shutdown.clone(),
            stopped.clone(),
            config.shutdown.grace_period(),
        )
        .spawn()
        .map_err(LaunchError::Signals)?;

        let ctx = ServiceContext {
            verbose: args.verbose,
            config: self.config.clone(),
            shutdown: shutdown.clone(),
        };

        tracing::debug!(verbose = args.verbose, "Starting service");
        let result = self.service.run(ctx).await;
        stopped.trigger();
        coordinator.abort();

        // Once a shutdown was requested, the process exits 0 however the
        // service ended.
        if shutdown.is_triggered() {
            if let Err(e) = result {
                tracing::warn!(error = %e, "Service reported an error while shutting down");
            }
            tracing::info!("Service stopped after shutdown request");
            return Ok(());
        }

        result?;
        tracing::info!("Service finished");
        Ok(())
    }
}
