use serde::{Deserialize, Serialize};

/// Append-only header access to an in-flight response.
///
/// Implementations must append: an existing header with the same name is
/// kept, never replaced.
pub trait ResponseHeaders {
    fn add_header(&mut self, name: &str, value: &str);
}

/// Cookie value and domain read from the session for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookiePayload {
    pub value: Option<String>,
    pub domain: Option<String>,
}

impl CookiePayload {
    pub fn new(value: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            domain: Some(domain.into()),
        }
    }

    /// Both parts absent, as after a failed session read.
    pub fn absent() -> Self {
        Self::default()
    }
}

/// Response under construction by the host.
///
/// Header names are stored lowercase and may repeat; insertion order is
/// preserved.
#[derive(Debug, Clone)]
pub struct AuthResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl AuthResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn text(status: u16, text: impl Into<String>) -> Self {
        Self::new(status)
            .with_header("content-type", "text/plain")
            .with_body(text.into().into_bytes())
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into().to_ascii_lowercase(), value.into()));
        self
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// First value for `name`, case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_values(name).into_iter().next()
    }

    /// Every value for `name` in insertion order, case-insensitive.
    pub fn header_values(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn header_count(&self, name: &str) -> usize {
        self.headers
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(name))
            .count()
    }
}

impl ResponseHeaders for AuthResponse {
    fn add_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_ascii_lowercase(), value.to_string()));
    }
}

impl ResponseHeaders for http::HeaderMap {
    fn add_header(&mut self, name: &str, value: &str) {
        match (
            http::HeaderName::from_bytes(name.as_bytes()),
            http::HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.append(name, value);
            }
            _ => {
                tracing::warn!(target: "legacy_session", header = name, "Skipping invalid header");
            }
        }
    }
}

impl<R: ResponseHeaders + ?Sized> ResponseHeaders for &mut R {
    fn add_header(&mut self, name: &str, value: &str) {
        (**self).add_header(name, value);
    }
}
