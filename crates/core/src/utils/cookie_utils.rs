//! `Set-Cookie` construction for the legacy cookie.
//!
//! The attribute set is fixed: `Path`, `Domain`, `secure` and `httpOnly`,
//! with no `Max-Age` or `Expires` so the browser treats it as a session
//! cookie. Values are substituted verbatim.

use crate::config::RelayConfig;
use crate::types::CookiePayload;

/// Build the legacy `Set-Cookie` header value from a payload.
///
/// Absent parts render as [`RelayConfig::absent_placeholder`].
pub fn build_legacy_cookie(payload: &CookiePayload, config: &RelayConfig) -> String {
    let placeholder = config.absent_placeholder.as_str();
    let value = payload.value.as_deref().unwrap_or(placeholder);
    let domain = payload.domain.as_deref().unwrap_or(placeholder);

    format!(
        "{}; Path={}; Domain={}; secure; httpOnly;",
        value, config.cookie_path, domain
    )
}
