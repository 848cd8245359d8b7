//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port using the reqwest library.

use std::collections::HashMap;

use async_trait::async_trait;
use probe_application::ports::{HttpResponse, HttpTransport, TransportError};
use probe_domain::{HttpMethod, RequestOptions};
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Url};
use tracing::debug;

/// Default User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("Probe/", env!("CARGO_PKG_VERSION"));

const MAX_REDIRECTS: usize = 10;

/// HTTP transport implementation using reqwest.
///
/// Requests carry no timeout: a slow endpoint holds its test case until it
/// answers.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a new transport with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "Probe/<version>"
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    /// Creates a new transport sending the given User-Agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn with_user_agent(user_agent: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a new transport with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Options => Method::OPTIONS,
        }
    }

    /// Builds the reqwest request from the test's options.
    fn build_request(&self, url: Url, options: &RequestOptions) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .request(Self::to_reqwest_method(options.method), url);

        for header in options.headers.enabled() {
            builder = builder.header(&header.name, &header.value);
        }
        if !options.method.sends_body() {
            return builder;
        }
        if let Some(content_type) = options.implied_content_type() {
            builder = builder.header("Content-Type", content_type);
        }
        if let Some(body) = &options.body {
            builder = builder.body(body.clone());
        }

        builder
    }

    /// Maps reqwest errors to `TransportError`.
    fn map_error(error: &reqwest::Error) -> TransportError {
        if error.is_connect() {
            return TransportError::ConnectionFailed(error.to_string());
        }
        if error.is_redirect() {
            return TransportError::Other(format!("more than {MAX_REDIRECTS} redirects"));
        }
        if error.is_builder() {
            return TransportError::InvalidRequest(error.to_string());
        }

        TransportError::Other(error.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, TransportError> {
        let parsed_url =
            Url::parse(url).map_err(|e| TransportError::InvalidUrl(format!("{e}: {url}")))?;

        debug!(method = %options.method, %url, "sending request");
        let response = self
            .build_request(parsed_url, options)
            .send()
            .await
            .map_err(|e| Self::map_error(&e))?;

        let status = response.status().as_u16();
        let headers = fold_headers(response.headers());

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Other(format!("Failed to read body: {e}")))?
            .to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}

/// Collapses repeated headers into one comma-separated value per name.
fn fold_headers(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .keys()
        .map(|name| {
            let values: Vec<&str> = headers
                .get_all(name)
                .iter()
                .map(|v| v.to_str().unwrap_or("<binary>"))
                .collect();
            (name.to_string(), values.join(", "))
        })
        .collect()
}
