//! Request wrapper behaviour: headers, base URL, error and empty-body handling

use std::sync::Arc;

use crate::common::*;
use crate::{assert_ok, assert_status_err};
use assert_matches::assert_matches;
use easyblog::client::{BlogApi, MemoryTokenStore, RequestOptions, TokenStore};
use easyblog::shared::{ClientConfig, ClientError};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_bearer_header_when_token_stored() {
    let mock = MockBlogServer::with_token("abc").await;
    Mock::given(method("GET"))
        .and(path("/api/ping"))
        .and(header("authorization", auth_header("abc").as_str()))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock.server)
        .await;

    let body = assert_ok!(mock.api().http().request("/ping", RequestOptions::get()).await);
    assert_eq!(body, json!({"ok": true}));
}

#[tokio::test]
async fn test_no_authorization_without_token() {
    let mock = MockBlogServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock.server)
        .await;

    assert_ok!(mock.api().http().request("/ping", RequestOptions::get()).await);

    let request = mock.single_request().await;
    assert!(header_value(&request, "authorization").is_none());
    assert_eq!(
        header_value(&request, "content-type").as_deref(),
        Some("application/json")
    );
}

#[tokio::test]
async fn test_token_read_per_request() {
    let mock = MockBlogServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ping"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock.server)
        .await;
    let api = mock.api();

    assert_ok!(api.http().request("/ping", RequestOptions::get()).await);
    mock.tokens.set(Some("later")).unwrap();
    assert_ok!(api.http().request("/ping", RequestOptions::get()).await);

    let requests = mock.requests().await;
    assert_eq!(requests.len(), 2);
    assert!(header_value(&requests[0], "authorization").is_none());
    assert_eq!(
        header_value(&requests[1], "authorization"),
        Some(auth_header("later"))
    );
}

#[tokio::test]
async fn test_empty_success_body_is_empty_object() {
    let mock = MockBlogServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/posts/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock.server)
        .await;

    let body = assert_ok!(
        mock.api()
            .http()
            .request("/posts/1", RequestOptions::delete())
            .await
    );
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_non_json_success_body_is_empty_object() {
    let mock = MockBlogServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock.server)
        .await;

    let body = assert_ok!(mock.api().http().request("/health", RequestOptions::get()).await);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_error_message_is_body_text() {
    let mock = MockBlogServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"error":"title is required"}"#))
        .mount(&mock.server)
        .await;

    let options = RequestOptions::post(&json!({})).unwrap();
    let result = mock.api().http().request("/posts", options).await;
    assert_status_err!(result, 400, r#"{"error":"title is required"}"#);
}

#[tokio::test]
async fn test_error_message_falls_back_to_status_text() {
    let mock = MockBlogServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/boom"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock.server)
        .await;

    let http = mock.api().http().clone();
    assert_status_err!(
        http.request("/auth/profile", RequestOptions::get()).await,
        401,
        "Unauthorized"
    );
    assert_status_err!(
        http.request("/boom", RequestOptions::get()).await,
        500,
        "Internal Server Error"
    );
}

#[tokio::test]
async fn test_body_sent_unmodified() {
    let mock = MockBlogServer::start().await;
    let payload = json!({"title": "Hi", "nested": {"list": [1, 2, 3]}, "empty": ""});
    Mock::given(method("PUT"))
        .and(path("/api/things/9"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
        .expect(1)
        .mount(&mock.server)
        .await;

    let options = RequestOptions::put(&payload).unwrap();
    let echoed = assert_ok!(mock.api().http().request("/things/9", options).await);
    assert_eq!(echoed, payload);
}

#[tokio::test]
async fn test_caller_headers_are_forwarded_but_not_overriding() {
    let mock = MockBlogServer::with_token("abc").await;
    Mock::given(method("GET"))
        .and(path("/api/ping"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock.server)
        .await;

    let options = RequestOptions::get()
        .header("X-Request-Id", "r-1")
        .header("Authorization", "Basic nope");
    assert_ok!(mock.api().http().request("/ping", options).await);

    let request = mock.single_request().await;
    assert_eq!(header_value(&request, "x-request-id").as_deref(), Some("r-1"));
    assert_eq!(header_value(&request, "authorization"), Some(auth_header("abc")));
}

#[tokio::test]
async fn test_network_failure() {
    // discard port, nothing listens
    let config = ClientConfig::builder()
        .base_url("http://127.0.0.1:9/api")
        .build()
        .unwrap();
    let api = BlogApi::from_config(config, Arc::new(MemoryTokenStore::new()));

    let result = api.http().request("/ping", RequestOptions::get()).await;
    assert_matches!(result, Err(ClientError::Network(_)));
}

#[tokio::test]
async fn test_decode_error_on_wrong_shape() {
    let mock = MockBlogServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"title": 5})))
        .mount(&mock.server)
        .await;

    let result = mock.api().fetch_post(1).await;
    assert_matches!(result, Err(ClientError::Decode(_)));
}
