//! Warning and error reporting for the loader
//!
//! The loader never logs through a global directly. It reports through a
//! [`Diagnostics`] collaborator so callers and tests can observe what was
//! reported.

use std::sync::Mutex;

/// Sink for user-facing warnings and errors raised while loading.
pub trait Diagnostics: Send + Sync {
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards to `tracing`. This is the default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Warn,
    Error,
}

/// A single reported message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

/// Keeps every reported message in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    entries: Mutex<Vec<Diagnostic>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far, in order.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Messages reported at `level`, in order.
    pub fn messages(&self, level: DiagnosticLevel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.message.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn record(&self, level: DiagnosticLevel, message: &str) {
        self.lock().push(Diagnostic {
            level,
            message: message.to_string(),
        });
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        // A panicking test thread must not hide the messages from the others.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, message: &str) {
        self.record(DiagnosticLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(DiagnosticLevel::Error, message);
    }
}
