//! HTTP Request Wrapper
//!
//! Every API call goes through [`HttpClient::request`]. The wrapper:
//!
//! 1. always sends `Content-Type: application/json`
//! 2. adds `Authorization: Bearer <token>` when the token store holds a token
//!    (read once per request)
//! 3. issues the call against `base_url + path`
//! 4. turns a non-2xx response into [`ClientError::Status`] carrying the body
//!    text, or the status text when the body is empty
//! 5. parses a 2xx body as JSON, falling back to `{}` when it is not JSON
//!    (endpoints such as delete answer with an empty body)
//!
//! There is no retry, no timeout and no caching; each call is independent.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::token_store::TokenStore;
use crate::shared::config::ClientConfig;
use crate::shared::error::{ClientError, Result};

/// Method, extra headers and JSON body of one request
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    pub fn post<B: Serialize + ?Sized>(body: &B) -> Result<Self> {
        Self::new(Method::POST).json(body)
    }

    pub fn put<B: Serialize + ?Sized>(body: &B) -> Result<Self> {
        Self::new(Method::PUT).json(body)
    }

    /// Attach a JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Add a caller header; `Content-Type` and `Authorization` are always
    /// overridden by the wrapper
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Thin request wrapper around a reqwest client, a base URL and a token store
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
    tokens: Arc<dyn TokenStore>,
}

impl HttpClient {
    pub fn new(config: ClientConfig, tokens: Arc<dyn TokenStore>) -> Self {
        Self::with_client(Client::new(), config, tokens)
    }

    /// Use a preconfigured reqwest client (proxies, TLS roots, ...)
    pub fn with_client(client: Client, config: ClientConfig, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            client,
            config,
            tokens,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Issue a request and return the parsed JSON body
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value> {
        let url = self.config.api_url(path);
        let token = self.tokens.get();
        let headers = build_headers(&options.headers, token.as_deref())?;

        tracing::debug!(
            "{} {} (auth: {})",
            options.method,
            url,
            if token.is_some() { "bearer" } else { "none" }
        );

        let mut request = self
            .client
            .request(options.method.clone(), &url)
            .headers(headers);
        if let Some(body) = &options.body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!("Network error on {} {}: {}", options.method, url, e);
            ClientError::Network(e)
        })?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("{} {} -> {}", options.method, url, status);

        if !status.is_success() {
            return Err(ClientError::status(status.as_u16(), error_message(status, text)));
        }
        Ok(parse_body(&text))
    }

    /// Issue a request and decode the body into `T`
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let value = self.request(path, options).await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Caller headers first, then the wrapper's own, which win on conflict
fn build_headers(extra: &[(String, String)], token: Option<&str>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (name, value) in extra {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ClientError::InvalidHeader(name.clone()))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| ClientError::InvalidHeader(name.to_string()))?;
        headers.insert(name, value);
    }

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ClientError::InvalidHeader(AUTHORIZATION.to_string()))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}

fn error_message(status: StatusCode, body: String) -> String {
    if body.is_empty() {
        status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string())
    } else {
        body
    }
}

fn parse_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::Object(Map::new()))
}
