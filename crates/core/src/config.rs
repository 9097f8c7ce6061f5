use crate::error::HookError;
use crate::logger::{Logger, default_logger};
use std::sync::Arc;

/// Session property holding the legacy cookie value written by the legacy
/// login node.
pub const LEGACY_COOKIE_SHARED_STATE_PARAM: &str = "legacyCookieValue";

/// Session property holding the domain the legacy cookie is scoped to.
pub const SESSION_LEGACY_COOKIE_DOMAIN: &str = "legacyCookieDomain";

/// Response header the legacy cookie is appended under.
pub const SET_COOKIE_HEADER: &str = "set-cookie";

/// Text rendered for a value or domain the session could not provide.
pub const ABSENT_PLACEHOLDER: &str = "null";

/// Configuration for the legacy cookie relay.
#[derive(Clone)]
pub struct RelayConfig {
    /// Session property read for the cookie value.
    pub value_property: String,

    /// Session property read for the cookie domain.
    pub domain_property: String,

    /// Header the cookie is appended under.
    ///
    /// Defaults to `"set-cookie"`.
    pub header_name: String,

    /// `Path` attribute of the cookie.
    ///
    /// Defaults to `"/"`.
    pub cookie_path: String,

    /// Rendered in place of an absent value or domain.
    ///
    /// Defaults to `"null"`, which is what legacy deployments already
    /// receive when the login node did not populate the session.
    pub absent_placeholder: String,

    /// Logger used by the relay.
    ///
    /// Defaults to a [`TracingLogger`](crate::logger::TracingLogger).
    pub logger: Arc<dyn Logger>,
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("value_property", &self.value_property)
            .field("domain_property", &self.domain_property)
            .field("header_name", &self.header_name)
            .field("cookie_path", &self.cookie_path)
            .field("absent_placeholder", &self.absent_placeholder)
            .finish_non_exhaustive()
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            value_property: LEGACY_COOKIE_SHARED_STATE_PARAM.to_string(),
            domain_property: SESSION_LEGACY_COOKIE_DOMAIN.to_string(),
            header_name: SET_COOKIE_HEADER.to_string(),
            cookie_path: "/".to_string(),
            absent_placeholder: ABSENT_PLACEHOLDER.to_string(),
            logger: default_logger(),
        }
    }
}

impl RelayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session property read for the cookie value.
    pub fn value_property(mut self, name: impl Into<String>) -> Self {
        self.value_property = name.into();
        self
    }

    /// Set the session property read for the cookie domain.
    pub fn domain_property(mut self, name: impl Into<String>) -> Self {
        self.domain_property = name.into();
        self
    }

    pub fn header_name(mut self, name: impl Into<String>) -> Self {
        self.header_name = name.into();
        self
    }

    pub fn cookie_path(mut self, path: impl Into<String>) -> Self {
        self.cookie_path = path.into();
        self
    }

    /// Set the text rendered for absent values.
    pub fn absent_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.absent_placeholder = placeholder.into();
        self
    }

    /// Set a custom logger implementation.
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn validate(&self) -> Result<(), HookError> {
        if self.value_property.is_empty() {
            return Err(HookError::config("Value property name cannot be empty"));
        }

        if self.domain_property.is_empty() {
            return Err(HookError::config("Domain property name cannot be empty"));
        }

        if http::HeaderName::from_bytes(self.header_name.as_bytes()).is_err() {
            return Err(HookError::config(format!(
                "Invalid header name: {:?}",
                self.header_name
            )));
        }

        if !self.cookie_path.starts_with('/') {
            return Err(HookError::config("Cookie path must start with '/'"));
        }

        // The path is written into the header verbatim.
        if self
            .cookie_path
            .bytes()
            .any(|b| b == b';' || b.is_ascii_control())
        {
            return Err(HookError::config(format!(
                "Invalid cookie path: {:?}",
                self.cookie_path
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RelayConfig::default();
        assert_eq!(config.value_property, "legacyCookieValue");
        assert_eq!(config.domain_property, "legacyCookieDomain");
        assert_eq!(config.header_name, "set-cookie");
        assert_eq!(config.cookie_path, "/");
        assert_eq!(config.absent_placeholder, "null");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = RelayConfig::new()
            .value_property("smsession")
            .domain_property("smdomain")
            .cookie_path("/app")
            .absent_placeholder("");
        assert_eq!(config.value_property, "smsession");
        assert_eq!(config.domain_property, "smdomain");
        assert_eq!(config.cookie_path, "/app");
        assert_eq!(config.absent_placeholder, "");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_property() {
        let err = RelayConfig::new().value_property("").validate().unwrap_err();
        assert!(err.to_string().contains("Value property"));

        let err = RelayConfig::new().domain_property("").validate().unwrap_err();
        assert!(err.to_string().contains("Domain property"));
    }

    #[test]
    fn test_validate_rejects_bad_header_name() {
        assert!(RelayConfig::new().header_name("set cookie").validate().is_err());
        assert!(RelayConfig::new().header_name("").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_relative_path() {
        assert!(RelayConfig::new().cookie_path("app").validate().is_err());
        assert!(RelayConfig::new().cookie_path("").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_attribute_injection_in_path() {
        for path in ["/; Domain=evil.example", "/app\r\nSet-Cookie: x=1", "/a\nb", "/\0"] {
            let err = RelayConfig::new().cookie_path(path).validate().unwrap_err();
            assert!(err.to_string().contains("Invalid cookie path"), "{path:?}");
        }
        assert!(RelayConfig::new().cookie_path("/legacy/app").validate().is_ok());
    }

    #[test]
    fn test_debug_omits_logger() {
        let rendered = format!("{:?}", RelayConfig::default());
        assert!(rendered.contains("legacyCookieValue"));
        assert!(!rendered.contains("logger"));
    }
}
