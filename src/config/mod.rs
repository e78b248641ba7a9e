//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (JSON)
//!     → loader.rs (open, decode, classify failures)
//!     → AppConfig (complete value, never partially applied)
//!     → shared.rs (atomic swap into the process-wide handle)
//!     → read by the service through its context
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Syntax errors get a fixed, user-facing message; schema errors keep the
//!   parser's diagnostic
//! - A failed load never touches the shared handle

pub mod loader;
pub mod schema;
pub mod shared;

pub use loader::{load_config, load_into, ConfigError};
pub use schema::{AppConfig, ListenerConfig, ShutdownConfig};
pub use shared::SharedConfig;
