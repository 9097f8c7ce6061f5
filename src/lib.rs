//! # Legacy Session Hook
//!
//! Forwards the cookie issued by a legacy identity system to the browser at
//! the end of a login flow, so single sign-on with the legacy system keeps
//! working during migration.
//!
//! ## Quick Start
//!
//! ```rust
//! use legacy_session_hook::{AuthResponse, HookEngine, MemorySession, RelayConfig};
//! use legacy_session_hook::SET_PERSISTENT_COOKIE_NODE;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = HookEngine::builder(RelayConfig::default())
//!     .legacy_session_hook(SET_PERSISTENT_COOKIE_NODE)
//!     .build()?;
//!
//! let session = MemorySession::new()
//!     .with_property("legacyCookieValue", "SMSESSION=abc123")
//!     .with_property("legacyCookieDomain", ".example.com");
//! let mut response = AuthResponse::new(302);
//!
//! engine.after_login(SET_PERSISTENT_COOKIE_NODE, &session, &mut response)?;
//!
//! assert_eq!(
//!     response.header("set-cookie"),
//!     Some("SMSESSION=abc123; Path=/; Domain=.example.com; secure; httpOnly;")
//! );
//! # Ok(())
//! # }
//! ```

// The engine lives in the root crate because it wires hooks from callers
// together with the relay from legacy-session-core.
pub mod core;
pub mod handlers;

pub use legacy_session_core::{
    AuthResponse, CookiePayload, HookError, HookRegistry, HookResult, LegacyCookieRelay, Logger,
    MemorySession, PropertyReadError, RelayConfig, ResponseHeaders, SessionProperties,
    TracingLogger, TreeHook, build_legacy_cookie,
};
pub use legacy_session_core::{
    LEGACY_COOKIE_SHARED_STATE_PARAM, SESSION_LEGACY_COOKIE_DOMAIN, SET_COOKIE_HEADER,
};

pub use self::core::{HookEngine, HookEngineBuilder, SET_PERSISTENT_COOKIE_NODE};

#[cfg(feature = "axum")]
pub use handlers::{into_axum_error, into_axum_response};
