//! The long-running service started by the launcher.
//!
//! # Responsibilities
//! - Define the contract the launcher drives (`Service`)
//! - Hand the service its verbosity, configuration and cancellation handle
//! - Ship a default service for the binary (`StatusServer`)
//!
//! # Design Decisions
//! - One blocking call per process: `run` returns when the service is done
//! - Cancellation is cooperative; the service decides how to wind down

pub mod status;

use std::future::Future;
use std::io;

use thiserror::Error;

use crate::config::SharedConfig;
use crate::lifecycle::Shutdown;

pub use status::StatusServer;

/// Everything a service receives from the launcher.
#[derive(Debug, Clone)]
pub struct ServiceContext {
    /// Resolved `--verbose` flag.
    pub verbose: bool,
    /// Process-wide configuration, already loaded.
    pub config: SharedConfig,
    /// Fires when the process has been asked to stop.
    pub shutdown: Shutdown,
}

/// Failure reported by a service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("service stopped unexpectedly: {0}")]
    Serve(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

/// A long-running service.
pub trait Service {
    /// Run until finished or cancelled.
    fn run(&self, ctx: ServiceContext) -> impl Future<Output = Result<(), ServiceError>> + Send;
}
