//! Transaction configuration: debug tracing and simulate mode.

use std::fmt;
use std::sync::Arc;

/// Where transaction debug traces go.
///
/// Tracing is observability only; it never changes the outcome of an
/// operation. The `Custom` variant receives each formatted trace line, which
/// is how tests capture the trace and how embedders route it into their own
/// logging.
#[derive(Clone, Default)]
pub enum DebugSink {
    /// No tracing (the default).
    #[default]
    Disabled,
    /// Emit each trace line at info level via `tracing`.
    Log,
    /// Hand each trace line to the given function.
    Custom(Arc<dyn Fn(&str) + Send + Sync>),
}

impl DebugSink {
    /// Emit one trace line. `line` is only rendered when the sink is active.
    pub(crate) fn trace(&self, line: impl FnOnce() -> String) {
        match self {
            DebugSink::Disabled => {}
            DebugSink::Log => tracing::info!("{}", line()),
            DebugSink::Custom(sink) => sink(&line()),
        }
    }

    /// Emit a line that must be observable even with tracing disabled.
    ///
    /// Simulate mode uses this: a dry run that reports nothing anywhere would
    /// be useless, so with no sink configured the line still goes to
    /// `tracing::info!`.
    pub(crate) fn report(&self, line: impl FnOnce() -> String) {
        match self {
            DebugSink::Disabled | DebugSink::Log => tracing::info!("{}", line()),
            DebugSink::Custom(sink) => sink(&line()),
        }
    }
}

impl fmt::Debug for DebugSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugSink::Disabled => write!(f, "Disabled"),
            DebugSink::Log => write!(f, "Log"),
            DebugSink::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Configuration for a [`Transaction`](crate::transaction::Transaction).
#[derive(Debug, Clone, Default)]
pub struct TransactionConfig {
    /// Debug trace destination.
    pub debug: DebugSink,
    /// When true, commit reports each operation through the debug sink and
    /// succeeds without contacting the backing store (dry run).
    pub simulate: bool,
}

impl TransactionConfig {
    /// Configuration for a dry run: every commit succeeds without store contact.
    pub fn simulated() -> Self {
        Self { simulate: true, ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_disabled_sink_never_renders() {
        let sink = DebugSink::Disabled;
        // The closure must not run when tracing is off.
        sink.trace(|| panic!("rendered a trace line with tracing disabled"));
    }

    #[test]
    fn test_custom_sink_receives_lines() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let captured = lines.clone();
        let sink = DebugSink::Custom(Arc::new(move |line| {
            captured.lock().push(line.to_string());
        }));

        sink.trace(|| "getting key user:1".to_string());
        sink.trace(|| "setting key user:2".to_string());

        let lines = lines.lock();
        assert_eq!(lines.as_slice(), ["getting key user:1", "setting key user:2"]);
    }

    #[test]
    fn test_simulated_config() {
        let config = TransactionConfig::simulated();
        assert!(config.simulate);
        assert!(matches!(config.debug, DebugSink::Disabled));
    }
}
