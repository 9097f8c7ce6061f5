//! # Legacy Session Core
//!
//! Capability traits, configuration, error handling and the legacy cookie
//! relay hook used at the end of a login flow.

pub mod config;
pub mod error;
pub mod hooks;
pub mod logger;
pub mod relay;
pub mod session;
pub mod types;
pub mod utils;

pub use config::{
    ABSENT_PLACEHOLDER, LEGACY_COOKIE_SHARED_STATE_PARAM, RelayConfig, SESSION_LEGACY_COOKIE_DOMAIN,
    SET_COOKIE_HEADER,
};
pub use error::{HookError, HookResult, PropertyReadError};
pub use hooks::{HookRegistry, TreeHook};
pub use logger::{Logger, TracingLogger, default_logger};
pub use relay::LegacyCookieRelay;
pub use session::{MemorySession, SessionProperties};
pub use types::{AuthResponse, CookiePayload, ResponseHeaders};
pub use utils::cookie_utils::build_legacy_cookie;
