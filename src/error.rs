//! Top-level error returned by the launcher.

use thiserror::Error;

use crate::config::ConfigError;
use crate::service::ServiceError;

/// Every way a launch can fail. All of them are terminal.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to register signal handlers: {0}")]
    Signals(#[source] std::io::Error),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl LaunchError {
    /// Failure class, for the `kind` field of the fatal log line.
    pub fn kind(&self) -> &'static str {
        match self {
            LaunchError::Config(e) => e.kind(),
            LaunchError::Signals(_) => "signal",
            LaunchError::Service(_) => "service",
        }
    }
}
