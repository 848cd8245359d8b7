//! Integration tests for running suites over real HTTP.
//!
//! These tests start a local axum server and drive the execution engine
//! through the reqwest transport.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde_json::{Value, json};

use probe_application::ports::{HttpTransport, MemorySink, TransportError};
use probe_application::{TestEngine, run_tests};
use probe_domain::{
    AssertionSpec, HttpMethod, RequestOptions, RunSummary, StatusColor, TestCase, TestSuite,
    Verdict,
};
use probe_infrastructure::{ReqwestTransport, SuiteFormat, parse_suite};

async fn user() -> Json<Value> {
    Json(json!({"data": {"id": 42, "name": "probe", "active": true}}))
}

async fn echo(headers: HeaderMap, body: String) -> impl IntoResponse {
    let trace = headers
        .get("x-trace")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("none")
        .to_string();
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("none")
        .to_string();
    (
        StatusCode::CREATED,
        [("x-trace", trace), ("x-received-content-type", content_type)],
        body,
    )
}

async fn html() -> &'static str {
    "<html>not json</html>"
}

async fn tagged() -> Response {
    let mut response = Json(json!({"tagged": true})).into_response();
    let headers = response.headers_mut();
    headers.append("x-tag", HeaderValue::from_static("a"));
    headers.append("x-tag", HeaderValue::from_static("b"));
    response
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_millis(150)).await;
    Json(json!({"slow": true}))
}

async fn start_server() -> SocketAddr {
    let app = Router::new()
        .route("/users/1", get(user))
        .route("/echo", post(echo))
        .route("/html", get(html))
        .route("/tagged", get(tagged))
        .route("/slow", get(slow));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server failed");
    });
    addr
}

#[tokio::test]
async fn test_transport_reads_status_headers_and_body() {
    let addr = start_server().await;
    let transport = ReqwestTransport::new().unwrap();

    let response = transport
        .send(&format!("http://{addr}/users/1"), &RequestOptions::get())
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    let snapshot = response.into_snapshot().unwrap();
    assert_eq!(snapshot.header("Content-Type"), Some("application/json"));
    assert_eq!(snapshot.body["data"]["id"], json!(42));
}

#[tokio::test]
async fn test_transport_sends_method_headers_and_body() {
    let addr = start_server().await;
    let transport = ReqwestTransport::new().unwrap();
    let options = RequestOptions::get()
        .with_method(HttpMethod::Post)
        .with_header("X-Trace", "abc-123")
        .with_body(r#"{"name": "probe"}"#);

    let response = transport
        .send(&format!("http://{addr}/echo"), &options)
        .await
        .unwrap();
    let snapshot = response.into_snapshot().unwrap();

    assert_eq!(snapshot.status, 201);
    assert_eq!(snapshot.header("x-trace"), Some("abc-123"));
    assert_eq!(
        snapshot.header("x-received-content-type"),
        Some("application/json")
    );
    assert_eq!(snapshot.body, json!({"name": "probe"}));
}

#[tokio::test]
async fn test_repeated_response_header_keeps_every_value() {
    let addr = start_server().await;
    let transport = ReqwestTransport::new().unwrap();

    let response = transport
        .send(&format!("http://{addr}/tagged"), &RequestOptions::get())
        .await
        .unwrap();
    let snapshot = response.into_snapshot().unwrap();

    assert_eq!(snapshot.header("X-Tag"), Some("a, b"));
    assert_eq!(
        AssertionSpec::header("tag", "x-tag", "a, b").evaluate(&snapshot),
        Verdict::Pass
    );
}

#[tokio::test]
async fn test_connection_refused() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = ReqwestTransport::new().unwrap();
    let result = transport
        .send(&format!("http://{addr}/"), &RequestOptions::get())
        .await;

    assert!(matches!(result, Err(TransportError::ConnectionFailed(_))));
}

#[tokio::test]
async fn test_full_run_against_server() {
    let addr = start_server().await;
    let base = format!("http://{addr}");
    let tests = vec![
        TestCase::get("get user", format!("{base}/users/1"))
            .with_assertion(AssertionSpec::status_code("status is 200", 200))
            .with_assertion(AssertionSpec::body("id is 42", ["data", "id"], 42))
            .with_assertion(AssertionSpec::body("is active", ["data", "active"], true))
            .with_assertion(AssertionSpec::header(
                "json content type",
                "content-type",
                "application/json",
            )),
        TestCase::get("missing field", format!("{base}/users/1"))
            .with_assertion(AssertionSpec::body("email", ["data", "email"], "a@b.c")),
        TestCase::get("not json", format!("{base}/html"))
            .with_assertion(AssertionSpec::status_code("status is 200", 200)),
        TestCase::get("unknown route", format!("{base}/nowhere"))
            .with_assertion(AssertionSpec::status_code("status is 200", 200)),
    ];

    let sink = Arc::new(MemorySink::new());
    let transport = Arc::new(ReqwestTransport::new().unwrap());
    let report = run_tests(transport, sink.clone(), &tests).await;
    let final_status = &report.snapshot;

    assert_eq!(
        final_status.summary,
        RunSummary {
            passed: 1,
            failed: 3,
            remaining: 0
        }
    );
    assert_eq!(final_status.tests[0].color, StatusColor::Pass);
    assert_eq!(
        final_status.tests[1].assertions[0].failure_message,
        "Expected a@b.c received undefined"
    );
    assert!(
        final_status.tests[2].assertions[0]
            .failure_message
            .starts_with("Request failed: invalid response body")
    );
    // axum answers unknown routes with an empty 404 body
    assert_eq!(
        final_status.tests[3].assertions[0].failure_message,
        "Expected 200 received 404"
    );
    assert_eq!(sink.latest().as_ref(), Some(final_status));
}

#[tokio::test]
async fn test_slow_request_blocks_next_test() {
    let addr = start_server().await;
    let suite = TestSuite::new("ordering")
        .with_test(TestCase::get("slow", format!("http://{addr}/slow")))
        .with_test(TestCase::get("fast", format!("http://{addr}/users/1")));

    let engine = TestEngine::new(Arc::new(ReqwestTransport::new().unwrap()), MemorySink::new());
    let report = engine.run_suite(&suite).await.unwrap();
    assert!(report.all_passed());

    let published = engine.sink().snapshots();
    for snapshot in &published {
        if snapshot.tests[1].color != StatusColor::Pending {
            assert!(snapshot.tests[0].color.is_terminal());
        }
    }
}

#[tokio::test]
async fn test_suite_file_runs_end_to_end() {
    let addr = start_server().await;
    let document = format!(
        r#"
name: from yaml
tests:
  - title: user
    url: http://{addr}/users/1
    assertions:
      - title: name
        kind: BODY
        path: [data, name]
        expected: probe
      - title: odd kind
        kind: BOOLEAN
        expected: true
"#
    );
    let suite = parse_suite(&document, SuiteFormat::Yaml).unwrap();

    let engine = TestEngine::new(Arc::new(ReqwestTransport::new().unwrap()), MemorySink::new());
    let report = engine.run_suite(&suite).await.unwrap();
    let assertions = &report.snapshot.tests[0].assertions;

    assert_eq!(assertions[0].color, StatusColor::Pass);
    assert_eq!(assertions[1].failure_message, "Invalid Assert type");
    assert_eq!(report.snapshot.tests[0].color, StatusColor::Fail);
}
