//! Domain API
//!
//! Typed functions for each EasyBlog endpoint, built on [`HttpClient`]. Each
//! function maps one operation to a method, path and body, and unwraps the
//! server's response envelope. The envelopes differ per endpoint and are kept
//! exactly as the server sends them:
//!
//! | endpoint | envelope |
//! |---|---|
//! | posts list | `{total, items}` returned as [`PostPage`](crate::shared::types::PostPage) |
//! | posts by category / tag | bare array |
//! | comments | `{items}` |
//! | categories, tags, friends, config list | `{data, total}` |
//! | config entry | `{data: {key, value}}` |
//!
//! A missing or `null` envelope field yields an empty list. Errors from the
//! wrapper are returned unchanged; nothing here retries.

mod auth;
mod categories;
mod comments;
mod friends;
mod posts;
mod site_config;
mod tags;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::client::http::HttpClient;
use crate::client::token_store::TokenStore;
use crate::shared::config::ClientConfig;
use crate::shared::error::Result;
use crate::shared::types::{null_as_default, Page};

/// EasyBlog API client
#[derive(Debug, Clone)]
pub struct BlogApi {
    http: HttpClient,
}

impl BlogApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn from_config(config: ClientConfig, tokens: Arc<dyn TokenStore>) -> Self {
        Self::new(HttpClient::new(config, tokens))
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Token currently held by the token store
    pub fn stored_token(&self) -> Option<String> {
        self.http.tokens().get()
    }
}

/// `{data: [...], total}`
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct DataEnvelope<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    data: Vec<T>,
}

/// `{items: [...]}`
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct ItemsEnvelope<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    items: Vec<T>,
}

/// Decode a bare JSON array; the wrapper's `{}` for an empty body counts as empty
fn decode_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>> {
    match value {
        Value::Object(map) if map.is_empty() => Ok(Vec::new()),
        Value::Null => Ok(Vec::new()),
        other => Ok(serde_json::from_value(other)?),
    }
}

/// Encode query parameters the way a browser's `URLSearchParams` does
fn query(pairs: &[(&str, String)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

fn page_query(page: Page) -> String {
    query(&[
        ("page", page.page.to_string()),
        ("size", page.size.to_string()),
    ])
}
