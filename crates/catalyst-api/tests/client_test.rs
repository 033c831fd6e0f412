#![allow(clippy::unwrap_used)]
// Integration tests for `CatalystClient` using wiremock.

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use reqwest::Method;
use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use catalyst_api::{CatalystClient, Error, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

const BASE: &str = "/dna/intent/api/v1";

async fn setup() -> (MockServer, CatalystClient) {
    let server = MockServer::start().await;
    let transport = TransportConfig {
        rate_limit_delay: Duration::ZERO,
        ..TransportConfig::default()
    };
    let token = SecretString::from("test-token".to_owned());
    let client =
        CatalystClient::from_token(&format!("{}{BASE}", server.uri()), &token, &transport).unwrap();
    (server, client)
}

fn api_path(suffix: &str) -> String {
    format!("{BASE}/{suffix}")
}

// ── Headers & forwarding ────────────────────────────────────────────

#[tokio::test]
async fn test_forward_sends_auth_and_json_headers() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("site")))
        .and(header("X-Auth-Token", "test-token"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": []})))
        .expect(1)
        .mount(&server)
        .await;

    let value = client.forward(Method::GET, "/site", None, None).await.unwrap();
    assert_eq!(value, json!({"response": []}));
}

#[tokio::test]
async fn test_forward_passes_query_and_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("task")))
        .and(query_param("dryRun", "true"))
        .and(body_json(json!({"taskType": "noop"})))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"taskId": "t-9"})))
        .mount(&server)
        .await;

    let body = json!({"taskType": "noop"});
    let value = client
        .forward(
            Method::POST,
            "task",
            Some(&[("dryRun", "true".to_owned())][..]),
            Some(&body),
        )
        .await
        .unwrap();
    assert_eq!(value["taskId"], "t-9");
}

#[tokio::test]
async fn test_forward_empty_body_is_null() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("site")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let value = client.forward(Method::POST, "site", None, Some(&json!([]))).await.unwrap();
    assert_eq!(value, Value::Null);
}

// ── Error classification ────────────────────────────────────────────

#[tokio::test]
async fn test_401_is_auth_failure() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("site")))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&server)
        .await;

    let result = client.list_sites().await;
    assert!(
        matches!(result, Err(Error::AuthFailure)),
        "expected AuthFailure, got: {result:?}"
    );
}

#[tokio::test]
async fn test_429_waits_then_fails_without_resubmitting() {
    let server = MockServer::start().await;
    let client = CatalystClient::from_reqwest(&server.uri(), reqwest::Client::new())
        .unwrap()
        .with_rate_limit_delay(Duration::from_millis(50));

    Mock::given(method("GET"))
        .and(path("/network-device"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let started = Instant::now();
    let result = client.list_devices(None).await;

    assert!(matches!(result, Err(Error::RateLimited)), "got: {result:?}");
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[tokio::test]
async fn test_other_status_is_api_error_with_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("network-device/missing")))
        .respond_with(ResponseTemplate::new(404).set_body_string("No device"))
        .mount(&server)
        .await;

    let err = client.get_device("missing").await.unwrap_err();
    match err {
        Error::Api { status, ref body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "No device");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "API error: 404 - No device");
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Bind and drop a server so the port is closed.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };
    let client = CatalystClient::from_reqwest(&uri, reqwest::Client::new()).unwrap();

    let result = client.list_sites().await;
    assert!(matches!(result, Err(Error::Network { .. })), "got: {result:?}");
}

#[tokio::test]
async fn test_malformed_body_is_unexpected() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("site")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client.list_sites().await;
    assert!(matches!(result, Err(Error::Unexpected { .. })), "got: {result:?}");
}

// ── Typed endpoints ─────────────────────────────────────────────────

#[tokio::test]
async fn test_list_devices_with_site_filter() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("network-device")))
        .and(query_param("siteId", "site-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [{
                "id": "d1",
                "hostname": "cat9k-1",
                "family": "Switches and Hubs",
                "role": "ACCESS",
                "managementIpAddress": "10.10.20.51"
            }]
        })))
        .mount(&server)
        .await;

    let devices = client.list_devices(Some("site-7")).await.unwrap();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].hostname, "cat9k-1");
    assert_eq!(devices[0].management_ip_address.as_deref(), Some("10.10.20.51"));
}

#[tokio::test]
async fn test_device_endpoints_path() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("device/d1/endpoint")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [{"mac": "aa:bb:cc:dd:ee:ff", "ipAddress": "10.0.0.5"}]
        })))
        .mount(&server)
        .await;

    let endpoints = client.list_device_endpoints("d1").await.unwrap();
    assert_eq!(endpoints.len(), 1);
    assert_eq!(endpoints[0].ip_address.as_deref(), Some("10.0.0.5"));
    assert_eq!(endpoints[0].username, None);
}

#[tokio::test]
async fn test_count_endpoints_without_filter_sends_no_query() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(api_path("endpoint-analytics/endpoints/count")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 12})))
        .mount(&server)
        .await;

    let value = client.count_endpoints(&[]).await.unwrap();
    assert_eq!(value, json!({"count": 12}));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_run_task_reads_handle() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(api_path("task")))
        .and(body_json(json!({"taskType": "provision_device", "params": {"device_id": "d1"}})))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(json!({"taskId": "t-1", "progress": "In progress"})),
        )
        .mount(&server)
        .await;

    let task = client
        .run_task(&json!({"taskType": "provision_device", "params": {"device_id": "d1"}}))
        .await
        .unwrap();
    assert_eq!(task.task_id.as_deref(), Some("t-1"));
    assert_eq!(task.progress.as_deref(), Some("In progress"));
}
