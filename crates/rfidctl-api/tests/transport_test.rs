#![allow(clippy::unwrap_used)]
// Integration tests for `Transport` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{basic_auth, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rfidctl_api::{Credentials, Error, Transport};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Transport) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let transport = Transport::new(base_url, Credentials::new("admin", "admin")).unwrap();
    (server, transport)
}

// ── Request mechanics ───────────────────────────────────────────────

#[tokio::test]
async fn test_get_carries_basic_auth() {
    let (server, transport) = setup().await;

    Mock::given(method("GET"))
        .and(path("/version"))
        .and(basic_auth("admin", "admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version": "1.18"})))
        .expect(1)
        .mount(&server)
        .await;

    let body = transport.get("version").await.unwrap();
    assert_eq!(body["version"], "1.18");
}

#[tokio::test]
async fn test_write_is_get_with_query_params() {
    let (server, transport) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rfidconfig"))
        .and(query_param("infiniteinventory", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"infiniteinventory": true})))
        .mount(&server)
        .await;

    let body = transport
        .request(
            "rfidconfig",
            &[("infiniteinventory".into(), "true".into())],
        )
        .await
        .unwrap();
    assert_eq!(body, json!({"infiniteinventory": true}));
}

#[tokio::test]
async fn test_base_url_trailing_slash_tolerated() {
    let (server, _) = setup().await;

    let base_url = Url::parse(&format!("{}/", server.uri())).unwrap();
    let transport = Transport::new(base_url, Credentials::new("admin", "admin")).unwrap();

    Mock::given(method("GET"))
        .and(path("/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    transport.get("version").await.unwrap();
}

// ── Failure taxonomy ────────────────────────────────────────────────

#[tokio::test]
async fn test_unauthorized_is_http_status_not_decode() {
    let (server, transport) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let result = transport.get("rfidconfig").await;
    match result {
        Err(Error::HttpStatus(401)) => {}
        other => panic!("expected HttpStatus(401), got: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_http_status() {
    let (server, transport) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = transport.get("reboot").await;
    assert!(
        matches!(result, Err(Error::HttpStatus(500))),
        "got: {result:?}"
    );
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let (server, transport) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = transport.get("netinfo").await;
    match result {
        Err(Error::Decode { body, .. }) => assert!(body.contains("not json")),
        other => panic!("expected Decode error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_decode_error_with_multibyte_body_at_preview_cutoff() {
    let (server, transport) = setup().await;

    // Non-JSON body where the error-message preview cutoff lands inside a
    // multi-byte character; must come back as Decode, not a panic.
    let body = format!("{}é{}", "a".repeat(199), "b".repeat(50));
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.clone()))
        .mount(&server)
        .await;

    let result = transport.get("netinfo").await;
    match result {
        Err(Error::Decode { body: echoed, .. }) => assert_eq!(echoed, body),
        other => panic!("expected Decode error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_host_no_retry() {
    // Port 9 (discard) on localhost is not listening.
    let base_url = Url::parse("http://127.0.0.1:9").unwrap();
    let transport = Transport::new(base_url, Credentials::new("admin", "admin")).unwrap();

    let result = transport.get("version").await;
    match result {
        Err(err) => assert!(err.is_unreachable(), "got: {err:?}"),
        Ok(body) => panic!("expected Unreachable, got body: {body}"),
    }
}

#[tokio::test]
async fn test_probe_unreachable() {
    let base_url = Url::parse("http://127.0.0.1:9").unwrap();
    let transport = Transport::new(base_url, Credentials::new("admin", "admin")).unwrap();

    let result = transport.probe().await;
    assert!(
        matches!(result, Err(Error::Unreachable(_))),
        "got: {result:?}"
    );
}

#[tokio::test]
async fn test_probe_reachable() {
    let (server, _) = setup().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let transport = Transport::new(base_url, Credentials::new("admin", "admin")).unwrap();

    transport.probe().await.unwrap();
}
