//! HTTP transport port

use std::collections::HashMap;

use async_trait::async_trait;
use probe_domain::{RequestOptions, ResponseSnapshot};
use serde_json::Value;
use thiserror::Error;

/// Errors raised while obtaining a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request could not be built from the test's options.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No connection could be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The response body is not valid JSON.
    #[error("invalid response body: {0}")]
    InvalidBody(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// A fully received HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Parses the body as JSON.
    ///
    /// An empty (or whitespace-only) body parses as `null`.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::InvalidBody` if the body is not JSON.
    pub fn json(&self) -> Result<Value, TransportError> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&self.body).map_err(|e| TransportError::InvalidBody(e.to_string()))
    }

    /// Converts into the snapshot assertions are evaluated against.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::InvalidBody` if the body is not JSON.
    pub fn into_snapshot(self) -> Result<ResponseSnapshot, TransportError> {
        let body = self.json()?;
        Ok(ResponseSnapshot::new(self.status, self.headers, body))
    }
}

/// Port for issuing HTTP requests.
///
/// Any client able to send a request and return the full response can drive
/// a test run.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a request and waits for the complete response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be sent or the response
    /// could not be read.
    async fn send(&self, url: &str, options: &RequestOptions)
    -> Result<HttpResponse, TransportError>;
}
