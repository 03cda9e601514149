//! Registration flag and config management endpoints

use crate::assert_ok;
use crate::common::*;
use easyblog::client::site_config::ENABLE_REGISTER_KEY;
use easyblog::client::SiteConfig;
use easyblog::shared::Page;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

async fn mount_flag(mock: &MockBlogServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/config"))
        .and(query_param("key", ENABLE_REGISTER_KEY))
        .respond_with(response)
        .expect(1)
        .mount(&mock.server)
        .await;
}

#[tokio::test]
async fn test_registration_enabled() {
    let mock = MockBlogServer::start().await;
    mount_flag(
        &mock,
        ResponseTemplate::new(200)
            .set_body_json(json!({"data": {"key": "enable_register", "value": "true"}})),
    )
    .await;

    let config = SiteConfig::load(&mock.api()).await;
    assert_eq!(config.enable_register, Some(true));
    assert!(config.registration_enabled());
}

#[tokio::test]
async fn test_registration_disabled() {
    let mock = MockBlogServer::start().await;
    mount_flag(
        &mock,
        ResponseTemplate::new(200)
            .set_body_json(json!({"data": {"key": "enable_register", "value": "false"}})),
    )
    .await;

    let config = SiteConfig::load(&mock.api()).await;
    assert_eq!(config.enable_register, Some(false));
}

#[tokio::test]
async fn test_only_exact_true_enables() {
    let mock = MockBlogServer::start().await;
    mount_flag(
        &mock,
        ResponseTemplate::new(200)
            .set_body_json(json!({"data": {"key": "enable_register", "value": "TRUE"}})),
    )
    .await;

    let config = SiteConfig::load(&mock.api()).await;
    assert_eq!(config.enable_register, Some(false));
}

#[tokio::test]
async fn test_missing_flag_is_disabled() {
    let mock = MockBlogServer::start().await;
    mount_flag(
        &mock,
        ResponseTemplate::new(404).set_body_string("record not found"),
    )
    .await;

    let config = SiteConfig::load(&mock.api()).await;
    assert_eq!(config.enable_register, Some(false));
    assert!(!config.registration_enabled());
}

#[tokio::test]
async fn test_server_field_casing() {
    let mock = MockBlogServer::start().await;
    mount_flag(
        &mock,
        ResponseTemplate::new(200)
            .set_body_json(json!({"data": {"Key": "enable_register", "Value": "true"}})),
    )
    .await;

    let config = SiteConfig::load(&mock.api()).await;
    assert_eq!(config.enable_register, Some(true));
}

#[tokio::test]
async fn test_get_config_without_data() {
    let mock = MockBlogServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock.server)
        .await;

    let entry = assert_ok!(mock.api().get_config("site_name").await);
    assert!(entry.is_none());
}

#[tokio::test]
async fn test_list_config() {
    let mock = MockBlogServer::with_token(TEST_TOKEN).await;
    Mock::given(method("GET"))
        .and(path("/api/config/all"))
        .and(query_param("page", "0"))
        .and(query_param("size", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"Key": "enable_register", "Value": "true"},
                {"key": "site_name", "value": "EasyBlog"}
            ],
            "total": 2
        })))
        .expect(1)
        .mount(&mock.server)
        .await;

    let entries = assert_ok!(mock.api().list_config(Page::default()).await);
    let keys: Vec<_> = entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["enable_register", "site_name"]);
    assert_eq!(entries[1].value, "EasyBlog");
}

#[tokio::test]
async fn test_config_management() {
    let mock = MockBlogServer::with_token(TEST_TOKEN).await;
    Mock::given(method("POST"))
        .and(path("/api/config"))
        .and(body_json(json!({"key": "site_name", "value": "EasyBlog"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/config"))
        .and(query_param("key", "site_name"))
        .and(body_json(json!({"value": "My Blog"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/config"))
        .and(query_param("key", "site_name"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock.server)
        .await;

    let api = mock.api();
    assert_ok!(api.create_config("site_name", "EasyBlog").await);
    assert_ok!(api.update_config("site_name", "My Blog").await);
    assert_ok!(api.delete_config("site_name").await);
}
