//! Tests for the session probe

use super::*;
use crate::http::{HttpClient, HttpClientConfig};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn checker_for(base_url: &str) -> SessionAuthChecker {
    let config = HttpClientConfig::builder()
        .base_url(base_url)
        .timeout(Duration::from_secs(2))
        .build();
    SessionAuthChecker::new(Arc::new(HttpClient::with_config(config)))
}

#[tokio::test]
async fn test_check_session_authenticated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/check/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "authenticated": true,
            "username": "monitor"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let checker = checker_for(&mock_server.uri());
    let status = checker.check_session().await;

    match status {
        AuthStatus::Authenticated(marker) => assert_eq!(marker.username(), Some("monitor")),
        AuthStatus::Unauthenticated => panic!("Expected Authenticated"),
    }
}

#[tokio::test]
async fn test_check_session_explicit_false() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/check/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"authenticated": false})),
        )
        .mount(&mock_server)
        .await;

    let checker = checker_for(&mock_server.uri());
    assert!(!checker.check_session().await.is_authenticated());
}

#[tokio::test]
async fn test_check_session_missing_field_is_unauthenticated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/check/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let checker = checker_for(&mock_server.uri());
    assert!(!checker.check_session().await.is_authenticated());
}

#[tokio::test]
async fn test_check_session_401() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/check/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"authenticated": false})),
        )
        .mount(&mock_server)
        .await;

    let checker = checker_for(&mock_server.uri());
    assert!(!checker.check_session().await.is_authenticated());
}

#[tokio::test]
async fn test_check_session_403() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/check/"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let checker = checker_for(&mock_server.uri());
    assert!(!checker.check_session().await.is_authenticated());
}

#[tokio::test]
async fn test_check_session_no_response() {
    // Nothing listens here; the probe must still answer, not error out.
    let checker = checker_for("http://127.0.0.1:9");
    assert!(!checker.check_session().await.is_authenticated());
}

#[tokio::test]
async fn test_check_session_non_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/check/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&mock_server)
        .await;

    let checker = checker_for(&mock_server.uri());
    assert!(!checker.check_session().await.is_authenticated());
}

#[tokio::test]
async fn test_check_session_is_side_effect_free() {
    let mock_server = MockServer::start().await;

    // Exactly one GET, nothing else, per probe.
    Mock::given(method("GET"))
        .and(path("/auth/v1/check/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"authenticated": true})),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let checker = checker_for(&mock_server.uri());
    assert!(checker.check_session().await.is_authenticated());
    assert!(checker.check_session().await.is_authenticated());
}

#[test]
fn test_logout_url() {
    assert_eq!(
        logout_url("https://api.parkkiopas.fi/"),
        "https://api.parkkiopas.fi/logout/"
    );
    assert_eq!(
        logout_url("http://localhost:8000"),
        "http://localhost:8000/logout/"
    );
}
