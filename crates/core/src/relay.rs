//! Relays the legacy login cookie from the session into the response.

use crate::config::RelayConfig;
use crate::error::{HookResult, PropertyReadError};
use crate::hooks::TreeHook;
use crate::session::SessionProperties;
use crate::types::{CookiePayload, ResponseHeaders};
use crate::utils::cookie_utils::build_legacy_cookie;

/// Tree hook that forwards the legacy session cookie to the user agent after
/// a successful login.
///
/// The cookie value and domain are read from the session properties named in
/// [`RelayConfig`]. A failed read is logged and the missing parts render as
/// the absent placeholder; the header is appended regardless, so the login
/// flow is never interrupted by this hook.
#[derive(Debug, Clone, Default)]
pub struct LegacyCookieRelay {
    config: RelayConfig,
}

impl LegacyCookieRelay {
    pub const NAME: &'static str = "legacy-session";

    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Read the cookie value, then the domain.
    ///
    /// Stops at the first failed read: whatever was read before it is kept,
    /// everything after it stays absent.
    pub fn payload(&self, session: &dyn SessionProperties) -> CookiePayload {
        let mut payload = CookiePayload::absent();
        if let Err((property, e)) = self.read_into(session, &mut payload) {
            self.config
                .logger
                .error(&format!("Error reading session property {}: {}", property, e));
        }
        payload
    }

    /// Append the legacy cookie header to `response`.
    pub fn apply(&self, session: &dyn SessionProperties, response: &mut dyn ResponseHeaders) {
        self.config.logger.info("Creating legacy cookie");
        let payload = self.payload(session);
        let cookie = build_legacy_cookie(&payload, &self.config);
        response.add_header(&self.config.header_name, &cookie);
    }

    fn read_into<'a>(
        &'a self,
        session: &dyn SessionProperties,
        payload: &mut CookiePayload,
    ) -> Result<(), (&'a str, PropertyReadError)> {
        let value_property = self.config.value_property.as_str();
        payload.value = session
            .get_property(value_property)
            .map_err(|e| (value_property, e))?;
        self.config
            .logger
            .debug(&format!("Legacy cookie {:?}", payload.value));

        let domain_property = self.config.domain_property.as_str();
        payload.domain = session
            .get_property(domain_property)
            .map_err(|e| (domain_property, e))?;
        Ok(())
    }
}

impl TreeHook for LegacyCookieRelay {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn accept(
        &self,
        session: &dyn SessionProperties,
        response: &mut dyn ResponseHeaders,
    ) -> HookResult<()> {
        self.apply(session, response);
        Ok(())
    }
}
