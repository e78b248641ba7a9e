//! Service Launcher Library
//!
//! Loads a JSON configuration, sets up logging, runs one service and stops
//! it when the process receives SIGINT or SIGTERM.

pub mod cli;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod observability;
pub mod service;

pub use cli::Args;
pub use config::{AppConfig, ConfigError, SharedConfig};
pub use error::LaunchError;
pub use lifecycle::{Launcher, Shutdown};
pub use service::{Service, ServiceContext, ServiceError};
