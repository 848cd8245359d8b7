//! Response snapshot evaluated by assertions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The parts of an HTTP response that assertions can inspect.
///
/// Built once per test case, after the full body has been read and parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSnapshot {
    /// HTTP status code.
    pub status: u16,
    /// Response headers as received.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Parsed response body.
    #[serde(default)]
    pub body: Value,
}

impl ResponseSnapshot {
    /// Creates a new snapshot.
    #[must_use]
    pub const fn new(status: u16, headers: HashMap<String, String>, body: Value) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
