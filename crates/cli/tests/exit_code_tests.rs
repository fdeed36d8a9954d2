//! Integration tests for structured exit codes.

mod common;

use common::{auditlog_cmd, auditlog_cmd_for};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PUBLISH: [&str; 5] = ["publish", "--action", "a.b", "--action-type", "C"];

#[tokio::test]
async fn test_success_returns_exit_code_0() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    auditlog_cmd_for(&server.uri()).args(PUBLISH).assert().code(0);
}

#[tokio::test]
async fn test_unauthorized_returns_exit_code_2() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})))
        .mount(&server)
        .await;

    auditlog_cmd_for(&server.uri())
        .args(PUBLISH)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unauthorized"));
}

#[test]
fn test_connection_refused_returns_exit_code_3() {
    auditlog_cmd()
        .env("WORKOS_AUDITLOG_ENDPOINT", "http://127.0.0.1:1/events")
        .args(PUBLISH)
        .assert()
        .code(3);
}

#[tokio::test]
async fn test_unprocessable_returns_exit_code_5() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"message": "Invalid action name"})),
        )
        .mount(&server)
        .await;

    auditlog_cmd_for(&server.uri())
        .args(PUBLISH)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid action name"));
}

#[tokio::test]
async fn test_server_error_returns_exit_code_1() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    auditlog_cmd_for(&server.uri()).args(PUBLISH).assert().code(1);
}

#[test]
fn test_invalid_endpoint_returns_exit_code_1() {
    auditlog_cmd()
        .args(["--endpoint", "ftp://example.com/events"])
        .args(PUBLISH)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to build configuration"));
}
