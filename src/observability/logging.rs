//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the process-wide logger (stdout, human-readable timestamps)
//! - Provide leveled emit functions and their format-string macros
//! - Switch verbosity at runtime
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Verbosity is an on/off gate: verbose emits everything down to DEBUG,
//!   quiet emits nothing at all (errors included)
//! - The level lives in a reload layer so it can change after the
//!   subscriber is installed
//! - Colors only when stdout is a terminal and `NO_COLOR` is unset
//! - A fatal error is always reported: on stderr when the gate is closed

use std::ffi::OsStr;
use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use tracing::Dispatch;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{reload, Registry};

/// Timestamp layout used on every log line (`YYYY-MM-DD HH:MM:SS`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Exit status used when a fatal event terminates the process.
pub const FATAL_EXIT_CODE: i32 = 1;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// A logger instance: the verbosity flag plus the handle that gates output.
///
/// The flag and the level filter are always updated together, so
/// `verbose() == true` exactly when DEBUG and above are written.
pub struct Logger {
    verbose: AtomicBool,
    level: reload::Handle<LevelFilter, Registry>,
}

impl Logger {
    /// Build a logger writing to `writer`.
    ///
    /// Returns the logger and the dispatcher that carries it. The logger
    /// starts quiet; call [`Logger::set_verbose`] to open the gate.
    pub fn new<W>(writer: W, ansi: bool) -> (Self, Dispatch)
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let (filter, level) = reload::Layer::new(LevelFilter::OFF);

        let subscriber = tracing_subscriber::registry().with(filter).with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi)
                .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string())),
        );

        let logger = Self {
            verbose: AtomicBool::new(false),
            level,
        };
        (logger, Dispatch::new(subscriber))
    }

    /// Open (`true`) or close (`false`) the output gate.
    pub fn set_verbose(&self, enabled: bool) {
        let level = if enabled {
            LevelFilter::DEBUG
        } else {
            LevelFilter::OFF
        };

        if let Err(e) = self.level.reload(level) {
            eprintln!("failed to change log level: {e}");
            return;
        }
        self.verbose.store(enabled, Ordering::SeqCst);
    }

    /// Current verbosity.
    pub fn verbose(&self) -> bool {
        self.verbose.load(Ordering::SeqCst)
    }

    /// The level filter currently applied.
    pub fn level(&self) -> LevelFilter {
        self.level
            .with_current(|level| *level)
            .unwrap_or(LevelFilter::OFF)
    }
}

/// Install the process-wide logger on stdout.
///
/// Must run before anything else logs. Later calls are no-ops.
pub fn init_logger() {
    LOGGER.get_or_init(|| {
        let no_color = std::env::var_os("NO_COLOR");
        let ansi = use_ansi(io::stdout().is_terminal(), no_color.as_deref());
        let (logger, dispatch) = Logger::new(io::stdout, ansi);
        if let Err(e) = tracing::dispatcher::set_global_default(dispatch) {
            eprintln!("failed to install logger: {e}");
        }
        logger
    });
}

/// A non-empty `NO_COLOR` turns colors off.
fn use_ansi(is_terminal: bool, no_color: Option<&OsStr>) -> bool {
    is_terminal && no_color.map_or(true, OsStr::is_empty)
}

/// Set the verbosity of the process-wide logger.
pub fn set_verbose(enabled: bool) {
    match LOGGER.get() {
        Some(logger) => logger.set_verbose(enabled),
        None => eprintln!("set_verbose called before init_logger"),
    }
}

/// Verbosity of the process-wide logger (`false` before initialization).
pub fn get_verbose() -> bool {
    LOGGER.get().is_some_and(Logger::verbose)
}

pub fn info(msg: impl fmt::Display) {
    tracing::info!("{msg}");
}

pub fn debug(msg: impl fmt::Display) {
    tracing::debug!("{msg}");
}

pub fn warn(msg: impl fmt::Display) {
    tracing::warn!("{msg}");
}

pub fn error(msg: impl fmt::Display) {
    tracing::error!("{msg}");
}

/// Log at fatal severity and exit the process with [`FATAL_EXIT_CODE`].
///
/// When the logger is quiet the message also goes to stderr, so a failed
/// run is never silent. Only the top-level handler in `main` should call
/// this.
pub fn fatal(msg: impl fmt::Display) -> ! {
    let msg = msg.to_string();
    tracing::error!(severity = "fatal", "{msg}");
    if !get_verbose() {
        report_fatal(&mut io::stderr().lock(), &msg);
    }
    std::process::exit(FATAL_EXIT_CODE)
}

fn report_fatal(out: &mut impl Write, msg: &str) {
    let _ = writeln!(out, "fatal: {msg}");
    let _ = out.flush();
}

/// Log at panic severity, then panic with the same message.
pub fn panic(msg: impl fmt::Display) -> ! {
    let msg = msg.to_string();
    tracing::error!(severity = "panic", "{msg}");
    panic!("{msg}")
}

#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::observability::logging::info(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::observability::logging::debug(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::observability::logging::warn(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::observability::logging::error(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::observability::logging::fatal(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! panicf {
    ($($arg:tt)+) => {
        $crate::observability::logging::panic(format_args!($($arg)+))
    };
}

/// In-memory sink for asserting on log output.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct CaptureWriter(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl CaptureWriter {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[cfg(test)]
impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
