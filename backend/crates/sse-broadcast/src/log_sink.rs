use crate::DiagnosticSink;

use std::error::Error;
use std::fmt;

const LOG_TARGET: &str = "sse_broadcast";

/// Sink forwarding diagnostics to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn debug(&self, args: fmt::Arguments<'_>) {
        log::debug!(target: LOG_TARGET, "{args}");
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        log::info!(target: LOG_TARGET, "{args}");
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        log::warn!(target: LOG_TARGET, "{args}");
    }

    fn error(&self, category: &str, cause: &dyn Error) {
        log::error!(target: LOG_TARGET, "{category} - {cause}");
    }
}
