//! Logging abstraction for tree hooks.
//!
//! Hooks never reach for a global logger. They log through the [`Logger`]
//! carried by their configuration, which defaults to [`TracingLogger`] and
//! forwards to the [`tracing`] crate.

use std::fmt;
use std::sync::Arc;

/// Logging trait for tree hooks.
///
/// # Example
///
/// ```rust
/// use legacy_session_core::logger::{Logger, TracingLogger};
///
/// let logger = TracingLogger;
/// logger.info("hook registered");
///
/// struct StderrLogger;
/// impl Logger for StderrLogger {
///     fn info(&self, message: &str) {
///         eprintln!("[INFO] {}", message);
///     }
///     fn warn(&self, message: &str) {
///         eprintln!("[WARN] {}", message);
///     }
///     fn error(&self, message: &str) {
///         eprintln!("[ERROR] {}", message);
///     }
///     fn debug(&self, message: &str) {
///         eprintln!("[DEBUG] {}", message);
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an informational message.
    fn info(&self, message: &str);

    /// Log a warning message.
    fn warn(&self, message: &str);

    /// Log an error message.
    fn error(&self, message: &str);

    /// Log a debug message.
    fn debug(&self, message: &str);
}

impl fmt::Debug for dyn Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn Logger")
    }
}

/// Default logger, delegating to `tracing` under the `legacy_session` target.
#[derive(Debug, Clone)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "legacy_session", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "legacy_session", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "legacy_session", "{}", message);
    }

    fn debug(&self, message: &str) {
        tracing::debug!(target: "legacy_session", "{}", message);
    }
}

/// Create the default logger instance.
pub fn default_logger() -> Arc<dyn Logger> {
    Arc::new(TracingLogger)
}
