//! Test cases and suites.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use url::Url;

use super::AssertionSpec;
use crate::error::{DomainError, DomainResult};
use crate::request::RequestOptions;

/// One declared HTTP scenario with its assertions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Display title, unique within a suite.
    pub title: String,
    /// Target URL.
    pub url: String,
    /// Transport configuration for the request.
    #[serde(default, alias = "requestOptions")]
    pub request: RequestOptions,
    /// Assertions, evaluated in order.
    #[serde(default)]
    pub assertions: Vec<AssertionSpec>,
}

impl TestCase {
    /// Creates a GET test case without assertions.
    #[must_use]
    pub fn get(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            request: RequestOptions::get(),
            assertions: Vec::new(),
        }
    }

    /// Replaces the request options (builder pattern).
    #[must_use]
    pub fn with_request(mut self, request: RequestOptions) -> Self {
        self.request = request;
        self
    }

    /// Adds an assertion (builder pattern).
    #[must_use]
    pub fn with_assertion(mut self, assertion: AssertionSpec) -> Self {
        self.assertions.push(assertion);
        self
    }

    /// Checks that the URL is absolute http(s).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if the URL is empty, malformed or
    /// uses another scheme.
    pub fn validate(&self) -> DomainResult<()> {
        let invalid = |reason: String| DomainError::InvalidUrl {
            title: self.title.clone(),
            reason,
        };

        if self.url.trim().is_empty() {
            return Err(invalid("URL is required".to_string()));
        }
        let url = Url::parse(&self.url).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }
}

/// An ordered list of test cases run together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestSuite {
    /// Suite name.
    #[serde(default)]
    pub name: String,
    /// Test cases, run in order.
    #[serde(default)]
    pub tests: Vec<TestCase>,
}

impl TestSuite {
    /// Creates a new empty test suite.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tests: Vec::new(),
        }
    }

    /// Adds a test case (builder pattern).
    #[must_use]
    pub fn with_test(mut self, test: TestCase) -> Self {
        self.tests.push(test);
        self
    }

    /// Get the number of test cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Check if the suite is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Validates every test case and title uniqueness.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in suite order.
    pub fn validate(&self) -> DomainResult<()> {
        let mut titles = HashSet::with_capacity(self.tests.len());
        for test in &self.tests {
            if !titles.insert(test.title.as_str()) {
                return Err(DomainError::DuplicateTitle(test.title.clone()));
            }
            test.validate()?;
        }
        Ok(())
    }
}
