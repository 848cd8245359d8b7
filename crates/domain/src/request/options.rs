//! Per-test request options

use serde::{Deserialize, Serialize};

use super::HttpMethod;

/// Header sent with a test's request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header name, matched case-insensitively
    pub name: String,
    /// Raw header value
    pub value: String,
    /// Disabled headers stay in the suite file but are not sent
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl Header {
    /// Enabled header.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            enabled: true,
        }
    }
}

/// Request headers in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers {
    items: Vec<Header>,
}

impl Headers {
    /// No headers.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a header.
    pub fn add(&mut self, header: Header) {
        self.items.push(header);
    }

    /// Headers that will be sent, in order.
    pub fn enabled(&self) -> impl Iterator<Item = &Header> {
        self.items.iter().filter(|h| h.enabled)
    }

    /// Returns true if an enabled header with this name is present (case-insensitive).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.enabled().any(|h| h.name.eq_ignore_ascii_case(name))
    }

    /// True when nothing is declared, enabled or not.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Transport configuration for one test case's request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOptions {
    /// HTTP method
    #[serde(default)]
    pub method: HttpMethod,
    /// HTTP headers
    #[serde(default, skip_serializing_if = "Headers::is_empty")]
    pub headers: Headers,
    /// Raw request body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl RequestOptions {
    /// Options for a plain GET request.
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    /// Sets the method (builder pattern).
    #[must_use]
    pub const fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Adds a header (builder pattern).
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(Header::new(name, value));
        self
    }

    /// Sets the raw body (builder pattern).
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Content type to send when none is set explicitly.
    ///
    /// A body that parses as JSON is sent as `application/json`.
    #[must_use]
    pub fn implied_content_type(&self) -> Option<&'static str> {
        if self.headers.contains("content-type") {
            return None;
        }
        self.body
            .as_deref()
            .filter(|body| serde_json::from_str::<serde_json::Value>(body).is_ok())
            .map(|_| "application/json")
    }
}
