//! Shared test harness for `legacy-session-hook`.
//!
//! Provides:
//! - [`CapturingLogger`]: a [`Logger`] that records every event by level.
//! - [`legacy_session`]: a session populated the way the legacy login node
//!   leaves it.
//! - [`test_engine`]: an engine with the relay attached to the default node.

use std::sync::{Arc, Mutex};

use legacy_session_hook::{
    HookEngine, LEGACY_COOKIE_SHARED_STATE_PARAM, Logger, MemorySession, RelayConfig,
    SESSION_LEGACY_COOKIE_DOMAIN, SET_PERSISTENT_COOKIE_NODE,
};

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Level {
    Info,
    Warn,
    Error,
    Debug,
}

#[derive(Default)]
#[allow(dead_code)]
pub struct CapturingLogger {
    events: Mutex<Vec<(Level, String)>>,
}

#[allow(dead_code)]
impl CapturingLogger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self, level: Level) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.events.lock().unwrap().push((level, message.to_string()));
    }
}

impl Logger for CapturingLogger {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }

    fn debug(&self, message: &str) {
        self.push(Level::Debug, message);
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Session carrying a legacy cookie value and domain.
#[allow(dead_code)]
pub fn legacy_session(value: &str, domain: &str) -> MemorySession {
    MemorySession::new()
        .with_property(LEGACY_COOKIE_SHARED_STATE_PARAM, value)
        .with_property(SESSION_LEGACY_COOKIE_DOMAIN, domain)
}

/// Engine with the relay attached to [`SET_PERSISTENT_COOKIE_NODE`], logging
/// into the returned [`CapturingLogger`].
#[allow(dead_code)]
pub fn test_engine() -> (HookEngine, Arc<CapturingLogger>) {
    let logger = CapturingLogger::new();
    let engine = HookEngine::builder(RelayConfig::default().logger(logger.clone()))
        .legacy_session_hook(SET_PERSISTENT_COOKIE_NODE)
        .build()
        .expect("Failed to build test hook engine");
    (engine, logger)
}
