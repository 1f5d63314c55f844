use std::error::Error;
use std::fmt;

/// Pluggable reporting capability for non-fatal delivery problems.
///
/// Implementations are shared by every group and every concurrent send, so
/// they must be cheap and must never block the broadcast path.
pub trait DiagnosticSink: Send + Sync {
    fn debug(&self, args: fmt::Arguments<'_>);

    fn info(&self, args: fmt::Arguments<'_>);

    fn warn(&self, args: fmt::Arguments<'_>);

    /// Report a failure of the given category together with its cause
    fn error(&self, category: &str, cause: &dyn Error);
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn debug(&self, _args: fmt::Arguments<'_>) {}

    fn info(&self, _args: fmt::Arguments<'_>) {}

    fn warn(&self, _args: fmt::Arguments<'_>) {}

    fn error(&self, _category: &str, _cause: &dyn Error) {}
}
