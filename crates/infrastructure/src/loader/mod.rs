//! Test suite files.
//!
//! A suite is read from one explicitly named JSON or YAML file. The format
//! is chosen by file extension.

use std::path::Path;

use probe_domain::TestSuite;
use thiserror::Error;

/// Error type for suite loading.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// File path.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization failed.
    #[error("YAML deserialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension is not a known suite format.
    #[error("unsupported suite format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
}

/// Suite file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteFormat {
    /// JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl SuiteFormat {
    /// Picks the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `LoaderError::UnsupportedFormat` for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, LoaderError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(LoaderError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parses a suite document.
///
/// # Errors
///
/// Returns an error if the document doesn't match the suite structure.
pub fn parse_suite(content: &str, format: SuiteFormat) -> Result<TestSuite, LoaderError> {
    match format {
        SuiteFormat::Json => Ok(serde_json::from_str(content)?),
        SuiteFormat::Yaml => Ok(serde_yaml::from_str(content)?),
    }
}

/// Reads and parses a suite file.
///
/// When the document has no name, the file stem is used.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub async fn load_suite(path: impl AsRef<Path>) -> Result<TestSuite, LoaderError> {
    let path = path.as_ref();
    let format = SuiteFormat::from_path(path)?;
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoaderError::Io {
            path: path.display().to_string(),
            source,
        })?;

    let mut suite = parse_suite(&content, format)?;
    if suite.name.is_empty() {
        suite.name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
    }
    Ok(suite)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use probe_domain::{AssertionKind, Comparator, HttpMethod};
    use serde_json::{Value, json};

    const YAML_SUITE: &str = r#"
name: users api
tests:
  - title: get user
    url: https://api.example.com/users/1
    assertions:
      - title: status is 200
        type: STATUS_CODE
        expected: 200
      - title: id matches
        kind: BODY
        path: [data, id]
        expected: 1
      - title: no etag
        kind: HEADER
        path: [etag]
        expected: null
  - title: create user
    url: https://api.example.com/users
    request:
      method: POST
      headers:
        - name: Authorization
          value: Bearer token
      body: '{"name": "probe"}'
    assertions:
      - title: greater
        kind: STATUS_CODE
        comparator: GREATER
        expected: 200
"#;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            SuiteFormat::from_path(Path::new("suite.JSON")).unwrap(),
            SuiteFormat::Json
        );
        assert_eq!(
            SuiteFormat::from_path(Path::new("suite.yml")).unwrap(),
            SuiteFormat::Yaml
        );
        assert!(matches!(
            SuiteFormat::from_path(Path::new("suite.toml")),
            Err(LoaderError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_parse_yaml_suite() {
        let suite = parse_suite(YAML_SUITE, SuiteFormat::Yaml).unwrap();

        assert_eq!(suite.name, "users api");
        assert_eq!(suite.len(), 2);

        let first = &suite.tests[0];
        assert_eq!(first.assertions[0].kind, AssertionKind::StatusCode);
        assert_eq!(first.assertions[1].path, vec!["data", "id"]);
        assert_eq!(first.assertions[2].expected, Some(Value::Null));

        let second = &suite.tests[1];
        assert_eq!(second.request.method, HttpMethod::Post);
        assert!(second.request.headers.contains("authorization"));
        assert_eq!(
            second.assertions[0].comparator,
            Comparator::Unsupported("GREATER".to_string())
        );
    }

    #[test]
    fn test_parse_json_suite() {
        let document = json!({
            "tests": [{
                "title": "health",
                "url": "http://localhost:8080/health",
                "assertions": [{"title": "up", "kind": "BODY", "path": ["status"], "expected": "up"}]
            }]
        });
        let suite = parse_suite(&document.to_string(), SuiteFormat::Json).unwrap();

        assert_eq!(suite.tests[0].assertions[0].expected, Some(json!("up")));
        assert_eq!(suite.tests[0].request.method, HttpMethod::Get);
    }

    #[test]
    fn test_parse_rejects_malformed_document() {
        assert!(matches!(
            parse_suite("{\"tests\": [", SuiteFormat::Json),
            Err(LoaderError::Json(_))
        ));
        assert!(matches!(
            parse_suite("tests: [{title: 1", SuiteFormat::Yaml),
            Err(LoaderError::Yaml(_))
        ));
    }

    #[tokio::test]
    async fn test_load_suite_names_from_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("smoke.json");
        std::fs::write(&path, r#"{"tests": []}"#).unwrap();

        let suite = load_suite(&path).await.unwrap();
        assert_eq!(suite.name, "smoke");
        assert!(suite.is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_suite(dir.path().join("absent.yaml")).await;
        assert!(matches!(result, Err(LoaderError::Io { .. })));
    }
}
