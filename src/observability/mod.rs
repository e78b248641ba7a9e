//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (leveled events through the shared logger)
//!     → caller.rs (same events, tagged with source file and line)
//!
//! Consumers:
//!     → stdout, one human-readable line per event
//! ```
//!
//! # Design Decisions
//! - One logger per process, installed before anything else runs
//! - Verbosity gates all output, not just the low levels
//! - Fatal and panic severities are tagged fields on error events

pub mod caller;
pub mod logging;

pub use caller::with_caller;
pub use logging::{get_verbose, init_logger, set_verbose, Logger};
