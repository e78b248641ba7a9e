//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Spawn coordinator → Run service
//!
//! Coordinator (coordinator.rs):
//!     SIGTERM/SIGINT → Print notice → Fire Shutdown → Grace period → Exit 0
//!
//! Shutdown (shutdown.rs):
//!     One-shot handle the service awaits to wind down
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then signals, then the service
//! - Shutdown has a timeout: forced exit once the grace period ends
//! - Only the first signal counts

pub mod coordinator;
pub mod shutdown;
pub mod signals;
pub mod startup;

pub use coordinator::ShutdownCoordinator;
pub use shutdown::Shutdown;
pub use signals::ShutdownSignal;
pub use startup::Launcher;
