//! Assertion specifications and their evaluation.
//!
//! Assertions are declared as data (often loaded from a suite file), so the
//! kind and comparator tags keep unknown values around instead of failing
//! to deserialize. Evaluating such an assertion produces a failed verdict.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::value::{lookup, render, strict_eq};
use crate::response::ResponseSnapshot;

/// Message for an assertion whose kind is not supported.
pub const INVALID_KIND_MESSAGE: &str = "Invalid Assert type";

/// Message for an assertion whose comparator is not supported.
pub const INVALID_COMPARATOR_MESSAGE: &str = "Invalid Assert comparison type";

/// What part of the response an assertion inspects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssertionKind {
    /// A single response header, named by the first path segment.
    Header,
    /// A value drilled out of the parsed body.
    Body,
    /// The numeric status code.
    StatusCode,
    /// Any tag this runner does not know.
    Unsupported(String),
}

impl AssertionKind {
    /// Returns the wire tag for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Header => "HEADER",
            Self::Body => "BODY",
            Self::StatusCode => "STATUS_CODE",
            Self::Unsupported(tag) => tag,
        }
    }
}

impl From<String> for AssertionKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "HEADER" => Self::Header,
            "BODY" => Self::Body,
            "STATUS_CODE" => Self::StatusCode,
            _ => Self::Unsupported(tag),
        }
    }
}

impl From<AssertionKind> for String {
    fn from(kind: AssertionKind) -> Self {
        match kind {
            AssertionKind::Unsupported(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for AssertionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the actual value is compared to the expected one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Comparator {
    /// Strict equality.
    #[default]
    Equal,
    /// Any tag this runner does not know.
    Unsupported(String),
}

impl From<String> for Comparator {
    fn from(tag: String) -> Self {
        if tag == "EQUAL" {
            Self::Equal
        } else {
            Self::Unsupported(tag)
        }
    }
}

impl From<Comparator> for String {
    fn from(comparator: Comparator) -> Self {
        match comparator {
            Comparator::Equal => "EQUAL".to_string(),
            Comparator::Unsupported(tag) => tag,
        }
    }
}

/// One declared equality check against a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssertionSpec {
    /// Display title.
    pub title: String,
    /// Part of the response to inspect.
    #[serde(alias = "type")]
    pub kind: AssertionKind,
    /// Comparison to apply.
    #[serde(default)]
    pub comparator: Comparator,
    /// Keys used to drill into the body, or the header name.
    #[serde(default)]
    pub path: Vec<String>,
    /// Expected scalar; `None` stands for an absent value.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub expected: Option<Value>,
}

/// Keeps an explicit `null` distinct from a missing field.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl AssertionSpec {
    /// Asserts the response status code.
    #[must_use]
    pub fn status_code(title: impl Into<String>, expected: u16) -> Self {
        Self {
            title: title.into(),
            kind: AssertionKind::StatusCode,
            comparator: Comparator::Equal,
            path: Vec::new(),
            expected: Some(Value::from(expected)),
        }
    }

    /// Asserts a single header value.
    #[must_use]
    pub fn header(
        title: impl Into<String>,
        name: impl Into<String>,
        expected: impl Into<Value>,
    ) -> Self {
        Self {
            title: title.into(),
            kind: AssertionKind::Header,
            comparator: Comparator::Equal,
            path: vec![name.into()],
            expected: Some(expected.into()),
        }
    }

    /// Asserts a value inside the parsed body.
    #[must_use]
    pub fn body<I, S>(title: impl Into<String>, path: I, expected: impl Into<Value>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            kind: AssertionKind::Body,
            comparator: Comparator::Equal,
            path: path.into_iter().map(Into::into).collect(),
            expected: Some(expected.into()),
        }
    }

    /// Evaluates this assertion against a response.
    #[must_use]
    pub fn evaluate(&self, response: &ResponseSnapshot) -> Verdict {
        evaluate(self, response)
    }
}

/// Outcome of evaluating one assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", content = "message", rename_all = "snake_case")]
pub enum Verdict {
    /// The assertion held.
    Pass,
    /// The assertion did not hold.
    Fail(String),
}

impl Verdict {
    /// Returns true if the assertion held.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns the failure message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Pass => None,
            Self::Fail(message) => Some(message),
        }
    }
}

/// Evaluates one assertion against one response snapshot.
///
/// Pure and deterministic. Unsupported comparators are reported before
/// unsupported kinds.
#[must_use]
pub fn evaluate(assertion: &AssertionSpec, response: &ResponseSnapshot) -> Verdict {
    if assertion.comparator != Comparator::Equal {
        return Verdict::Fail(INVALID_COMPARATOR_MESSAGE.to_string());
    }

    let expected = assertion.expected.as_ref();
    match &assertion.kind {
        AssertionKind::Body => check_equal(lookup(&response.body, &assertion.path), expected),
        AssertionKind::Header => check_header(assertion, response, expected),
        AssertionKind::StatusCode => {
            let actual = Value::from(response.status);
            check_equal(Some(&actual), expected)
        }
        AssertionKind::Unsupported(_) => Verdict::Fail(INVALID_KIND_MESSAGE.to_string()),
    }
}

fn check_header(
    assertion: &AssertionSpec,
    response: &ResponseSnapshot,
    expected: Option<&Value>,
) -> Verdict {
    let actual = assertion
        .path
        .first()
        .and_then(|name| response.header(name))
        .map_or(Value::Null, Value::from);
    check_equal(Some(&actual), expected)
}

fn check_equal(actual: Option<&Value>, expected: Option<&Value>) -> Verdict {
    if strict_eq(actual, expected) {
        Verdict::Pass
    } else {
        Verdict::Fail(format!(
            "Expected {} received {}",
            render(expected),
            render(actual)
        ))
    }
}
