
use crate::DiagnosticSink;

use std::error::Error;
use std::fmt;
use std::sync::Mutex;

/// Severity of a recorded diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

/// Sink that keeps every report for later assertions
#[derive(Default)]
pub(crate) struct RecordingSink {
    entries: Mutex<Vec<(Level, String)>>,
}

impl RecordingSink {
    pub(crate) fn count(&self, level: Level) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .count()
    }

    pub(crate) fn messages(&self, level: Level) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: Level, message: String) {
        self.entries.lock().unwrap().push((level, message));
    }
}

impl DiagnosticSink for RecordingSink {
    fn debug(&self, args: fmt::Arguments<'_>) {
        self.push(Level::Debug, args.to_string());
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        self.push(Level::Info, args.to_string());
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        self.push(Level::Warn, args.to_string());
    }

    fn error(&self, category: &str, cause: &dyn Error) {
        self.push(Level::Error, format!("{category} - {cause}"));
    }
}
