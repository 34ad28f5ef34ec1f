//! Integration tests for the API client request contract
//!
//! **Coverage:**
//! - Header injection: Accept, Authorization, Content-Type per request kind
//! - Deadline: delayed responses fail at the deadline
//! - Error normalization: server messages, status text, transport failures
//! - Retry policy: single attempt by default, opt-in retries

#![allow(dead_code)]

#[path = "support.rs"]
mod support;

use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use lookcircuit_domain::{ApiConfig, LookCircuitError};
use lookcircuit_infra::FilePart;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

async fn mount_ok(server: &MockServer, http_method: &str, route: &str) {
    Mock::given(method(http_method))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(server)
        .await;
}

async fn single_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.expect("request recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|value| value.to_str().ok())
}

// ============================================================================
// Headers
// ============================================================================

#[tokio::test]
async fn anonymous_request_has_no_authorization_header() {
    support::init_tracing();
    let server = MockServer::start().await;
    mount_ok(&server, "GET", "/api/v1/users/me").await;

    let client = support::api_client(support::api_config(&server), None);
    let _: Value = client.get("/users/me").await.unwrap();

    let request = single_request(&server).await;
    assert_eq!(header(&request, "authorization"), None);
    assert_eq!(header(&request, "accept"), Some("application/json"));
    assert_eq!(header(&request, "user-agent"), Some(lookcircuit_infra::http::USER_AGENT));
}

#[tokio::test]
async fn stored_token_is_sent_as_bearer() {
    let server = MockServer::start().await;
    mount_ok(&server, "GET", "/api/v1/users/me").await;

    let client = support::api_client(support::api_config(&server), Some("abc123"));
    let _: Value = client.get("/users/me").await.unwrap();

    let request = single_request(&server).await;
    assert_eq!(header(&request, "authorization"), Some("Bearer abc123"));
}

#[tokio::test]
async fn get_does_not_set_content_type() {
    let server = MockServer::start().await;
    mount_ok(&server, "GET", "/api/v1/products/categories").await;

    let client = support::api_client(support::api_config(&server), None);
    let _: Value = client.get("/products/categories").await.unwrap();

    let request = single_request(&server).await;
    assert_eq!(header(&request, "content-type"), None);
}

#[tokio::test]
async fn multipart_content_type_comes_from_transport() {
    let server = MockServer::start().await;
    mount_ok(&server, "POST", "/api/v1/analysis/face").await;

    let client = support::api_client(support::api_config(&server), Some("abc123"));
    let file = FilePart::new("file", "photo.png", "image/png", vec![1, 2, 3]);
    let _: Value = client.post_multipart("/analysis/face", file).await.unwrap();

    let request = single_request(&server).await;
    let content_type = header(&request, "content-type").unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="), "{content_type}");

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains(r#"name="file"; filename="photo.png""#));
    assert!(body.contains("Content-Type: image/png"));
}

// ============================================================================
// Deadline and transport failures
// ============================================================================

#[tokio::test]
async fn delayed_response_fails_at_the_deadline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "ok"}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = ApiConfig { timeout_ms: 200, ..support::api_config(&server) };
    let client = support::api_client(config, None);

    let started = Instant::now();
    let err = client.get::<Value>("/health").await.unwrap_err();

    assert_eq!(err, LookCircuitError::Network);
    assert_eq!(err.to_string(), "Network error. Please check your connection.");
    assert!(started.elapsed() < Duration::from_secs(2), "took {:?}", started.elapsed());
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = support::api_client(ApiConfig::with_base_url(format!("http://{addr}")), None);
    let err = client.get::<Value>("/health").await.unwrap_err();

    assert_eq!(err, LookCircuitError::Network);
}

// ============================================================================
// Error normalization
// ============================================================================

#[tokio::test]
async fn unauthorized_detail_becomes_the_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid token"})))
        .mount(&server)
        .await;

    let client = support::api_client(support::api_config(&server), Some("expired"));
    let err = client.get::<Value>("/users/me").await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid token");
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn empty_error_body_falls_back_to_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = support::api_client(support::api_config(&server), None);
    let err = client.get::<Value>("/users/profile").await.unwrap_err();

    assert_eq!(err, LookCircuitError::Server { status: 404, message: "Not Found".into() });
}

// ============================================================================
// Retry policy
// ============================================================================

#[tokio::test]
async fn default_config_makes_one_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::api_client(support::api_config(&server), None);
    let err = client.get::<Value>("/health").await.unwrap_err();

    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn configured_retries_recover_from_server_errors() {
    let server = MockServer::start().await;
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();
    Mock::given(method("POST"))
        .and(path("/api/v1/products/discover"))
        .respond_with(move |_req: &Request| {
            if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                ResponseTemplate::new(503)
            } else {
                ResponseTemplate::new(200).set_body_json(json!({"ok": true}))
            }
        })
        .mount(&server)
        .await;

    let config = ApiConfig { max_retries: 2, retry_delay_ms: 10, ..support::api_config(&server) };
    let client = support::api_client(config, None);

    let body: Value = client.post("/products/discover", &json!({"categories": []})).await.unwrap();

    assert_eq!(body, json!({"ok": true}));
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    for request in server.received_requests().await.unwrap() {
        assert_eq!(request.body, br#"{"categories":[]}"#);
    }
}

#[tokio::test]
async fn retried_multipart_upload_resends_the_file() {
    let server = MockServer::start().await;
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();
    Mock::given(method("POST"))
        .respond_with(move |_req: &Request| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                ResponseTemplate::new(502)
            } else {
                ResponseTemplate::new(200).set_body_json(json!({"ok": true}))
            }
        })
        .mount(&server)
        .await;

    let config = ApiConfig { max_retries: 1, retry_delay_ms: 10, ..support::api_config(&server) };
    let client = support::api_client(config, None);
    let file = FilePart::new("file", "photo.jpg", "image/jpeg", b"jpeg-bytes".to_vec());

    let _: Value = client.post_multipart("/analysis/face", file).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| String::from_utf8_lossy(&r.body).contains("jpeg-bytes")));
}
