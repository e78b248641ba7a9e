//! Call-site enrichment for log events.
//!
//! `with_caller()` captures the location of its caller and returns a handle
//! whose emit methods attach `source=<file>:<line>` to the event. The message
//! itself is left untouched.

use std::fmt;
use std::panic::Location;
use std::path::Path;

/// Logging handle bound to a source location.
#[derive(Debug, Clone, Copy)]
pub struct Caller {
    location: &'static Location<'static>,
}

/// Capture the caller's file and line for the next log call.
#[track_caller]
pub fn with_caller() -> Caller {
    Caller {
        location: Location::caller(),
    }
}

impl Caller {
    /// `file:line`, with the directory part of the file stripped.
    pub fn source(&self) -> String {
        let file = Path::new(self.location.file())
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.location.file());
        format!("{}:{}", file, self.location.line())
    }

    pub fn info(&self, msg: impl fmt::Display) {
        tracing::info!(source = %self.source(), "{msg}");
    }

    pub fn debug(&self, msg: impl fmt::Display) {
        tracing::debug!(source = %self.source(), "{msg}");
    }

    pub fn warn(&self, msg: impl fmt::Display) {
        tracing::warn!(source = %self.source(), "{msg}");
    }

    pub fn error(&self, msg: impl fmt::Display) {
        tracing::error!(source = %self.source(), "{msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::logging::{CaptureWriter, Logger};

    #[test]
    fn test_source_points_at_call_site() {
        let line = line!() + 1;
        let caller = with_caller();
        assert_eq!(caller.source(), format!("caller.rs:{line}"));
    }

    #[test]
    fn test_caller_adds_source_without_touching_message() {
        let sink = CaptureWriter::default();
        let (logger, dispatch) = Logger::new(sink.clone(), false);
        logger.set_verbose(true);

        tracing::dispatcher::with_default(&dispatch, || {
            with_caller().info("config loaded");
        });

        let out = sink.contents();
        assert!(out.contains("config loaded"));
        assert!(out.contains("source=caller.rs:"));
    }

    #[test]
    fn test_caller_respects_quiet_logger() {
        let sink = CaptureWriter::default();
        let (_logger, dispatch) = Logger::new(sink.clone(), false);

        tracing::dispatcher::with_default(&dispatch, || {
            with_caller().error("hidden");
        });

        assert!(sink.contents().is_empty());
    }
}
