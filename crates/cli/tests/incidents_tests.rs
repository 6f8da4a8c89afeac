//! Integration tests for `mux-cli incidents`.

mod common;

use common::{TOKEN_ID, TOKEN_SECRET, mux_cmd, mux_cmd_with_base_url};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{basic_auth, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn incident_list() -> serde_json::Value {
    json!({
        "data": [
            {"id": "ABCD1234", "status": "open", "severity": "alert", "measurement": "error_rate"},
            {"id": "EFGH5678", "status": "closed", "severity": "warning"}
        ],
        "total_row_count": 2,
        "timeframe": [1700000000, 1700086400]
    })
}

#[test]
fn test_incidents_help() {
    mux_cmd()
        .args(["incidents", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("related"));
}

#[test]
fn test_list_help_shows_filters() {
    mux_cmd()
        .args(["incidents", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--status"))
        .stdout(predicate::str::contains("--severity"))
        .stdout(predicate::str::contains("--param"));
}

#[tokio::test]
async fn test_list_json_output() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/v1/incidents"))
        .and(basic_auth(TOKEN_ID, TOKEN_SECRET))
        .respond_with(ResponseTemplate::new(200).set_body_json(incident_list()))
        .expect(1)
        .mount(&server)
        .await;

    let output = mux_cmd_with_base_url(&server.uri())
        .args(["-o", "json", "incidents", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["data"][0]["id"], "ABCD1234");
    assert_eq!(parsed["total_row_count"], 2);
}

#[tokio::test]
async fn test_list_forwards_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/v1/incidents"))
        .and(query_param("status", "open"))
        .and(query_param("severity", "alert"))
        .and(query_param("limit", "5"))
        .and(query_param("order_direction", "desc"))
        .and(query_param("filters[]", "country:US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(incident_list()))
        .expect(1)
        .mount(&server)
        .await;

    mux_cmd_with_base_url(&server.uri())
        .args([
            "incidents",
            "list",
            "--status",
            "open",
            "--severity",
            "alert",
            "--limit",
            "5",
            "--order-direction",
            "desc",
            "--param",
            "filters[]=country:US",
        ])
        .assert()
        .success();
}

#[tokio::test]
async fn test_list_table_output() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/v1/incidents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(incident_list()))
        .mount(&server)
        .await;

    mux_cmd_with_base_url(&server.uri())
        .args(["incidents", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID\tStatus\tSeverity"))
        .stdout(predicate::str::contains("ABCD1234\topen\talert"))
        .stdout(predicate::str::contains("Showing 2 of 2 incidents"));
}

#[tokio::test]
async fn test_get_incident() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/v1/incidents/ABCD1234"))
        .and(basic_auth(TOKEN_ID, TOKEN_SECRET))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "ABCD1234", "status": "open", "description": "Error rate spike"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    mux_cmd_with_base_url(&server.uri())
        .args(["incidents", "get", "ABCD1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID:\tABCD1234"))
        .stdout(predicate::str::contains("Description:\tError rate spike"));
}

#[tokio::test]
async fn test_related_forwards_measurement() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/v1/incidents/ABCD1234/related"))
        .and(query_param("measurement", "median"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "IJKL9012", "status": "open"}],
            "total_row_count": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    mux_cmd_with_base_url(&server.uri())
        .args([
            "-o",
            "json",
            "incidents",
            "related",
            "ABCD1234",
            "--measurement",
            "median",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("IJKL9012"));
}

#[test]
fn test_invalid_status_rejected_by_parser() {
    mux_cmd()
        .args(["incidents", "list", "--status", "pending"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'pending'"));
}

#[tokio::test]
async fn test_output_file() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/v1/incidents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(incident_list()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("incidents.json");

    mux_cmd_with_base_url(&server.uri())
        .args(["-o", "json", "--output-file"])
        .arg(&out)
        .args(["incidents", "list"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written["data"][1]["id"], "EFGH5678");
}
