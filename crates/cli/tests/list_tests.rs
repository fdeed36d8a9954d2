//! Integration tests for `auditlog list`.

mod common;

use common::auditlog_cmd_for;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn empty_page() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"data": [], "listMetadata": {}}))
}

#[tokio::test]
async fn test_list_clamps_oversized_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .and(query_param("limit", "1000"))
        .respond_with(empty_page())
        .expect(1)
        .mount(&server)
        .await;

    auditlog_cmd_for(&server.uri())
        .args(["list", "--limit", "5000"])
        .assert()
        .success();
}

#[tokio::test]
async fn test_list_non_positive_limit_uses_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .and(query_param("limit", "10"))
        .respond_with(empty_page())
        .expect(2)
        .mount(&server)
        .await;

    for limit in ["0", "-3"] {
        auditlog_cmd_for(&server.uri())
            .args(["list", "--limit", limit])
            .assert()
            .success();
    }
}

#[tokio::test]
async fn test_list_sends_filters_and_prints_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .and(query_param("limit", "25"))
        .and(query_param("group", "acme.com"))
        .and(query_param("after", "evt_00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "evt_01",
                "action": "user.login",
                "action_type": "C",
                "actor_name": "Jairo Kunde",
                "actor_id": "user_01",
                "group": "acme.com",
                "location": "10.0.0.1",
                "occurred_at": "2024-05-01T12:00:00Z",
                "target_name": "dashboard",
                "target_id": "app_01"
            }],
            "listMetadata": {"before": "evt_01", "after": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = auditlog_cmd_for(&server.uri())
        .args(["list", "--limit", "25", "--group", "acme.com", "--after", "evt_00"])
        .assert()
        .success()
        .get_output()
        .clone();

    let printed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed["data"][0]["id"], json!("evt_01"));
    assert_eq!(printed["listMetadata"]["before"], json!("evt_01"));
}
