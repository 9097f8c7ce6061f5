use thiserror::Error;

/// Failure reading a property from the host session.
///
/// The legacy cookie relay logs this error and carries on; it never leaves
/// the relay.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertyReadError {
    #[error("Session is invalid or expired")]
    InvalidSession,

    #[error("Session store error: {0}")]
    Store(String),
}

/// Tree hook error types.
///
/// Anything returned as a `HookError` propagates to the host engine.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Hook error: {hook} - {message}")]
    Hook { hook: String, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HookError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn hook(hook: &str, message: impl Into<String>) -> Self {
        Self::Hook {
            hook: hook.to_string(),
            message: message.into(),
        }
    }
}

pub type HookResult<T> = Result<T, HookError>;
