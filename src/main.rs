//! Service Launcher
//!
//! # Startup Sequence
//!
//! ```text
//!   args ──▶ logger ──▶ config ──▶ coordinator (background) ──▶ service
//!                         │                  │                     │
//!                         ▼                  ▼                     ▼
//!                   fatal, exit 1    SIGINT/SIGTERM:          error: fatal,
//!                                    notice, cancel,          exit 1
//!                                    grace, exit 0            ok: exit 0
//! ```

use service_launcher::observability::logging;
use service_launcher::service::StatusServer;
use service_launcher::{Args, Launcher};

#[tokio::main]
async fn main() {
    let args = Args::parse_compat();

    logging::init_logger();
    logging::set_verbose(args.verbose);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %args.config.display(),
        verbose = logging::get_verbose(),
        "service-launcher starting"
    );

    let launcher = Launcher::new(StatusServer);
    if let Err(e) = launcher.launch(&args).await {
        logging::fatal(format_args!("{}: {}", e.kind(), e));
    }

    tracing::info!("Shutdown complete");
}
