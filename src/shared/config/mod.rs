//! Client configuration
//!
//! Where the API lives and where the bearer token is persisted.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! the `EASYBLOG_API_BASE` / `EASYBLOG_TOKEN_PATH` environment variables,
//! then anything set explicitly on the builder.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default API base (the dev proxy target plus the `/api` prefix)
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:7966/api";

/// Environment variable overriding the API base
pub const BASE_URL_ENV: &str = "EASYBLOG_API_BASE";

/// Environment variable overriding the token file location
pub const TOKEN_PATH_ENV: &str = "EASYBLOG_TOKEN_PATH";

/// Fixed key the bearer token is stored under
pub const TOKEN_KEY: &str = "easyblog_token";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    token_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token_path: default_token_path(),
        }
    }
}

impl ClientConfig {
    /// Create a new ClientConfigBuilder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Defaults overridden by the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::builder().with_env().build()
    }

    /// Load an optional TOML file, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if let Some(path) = path {
            builder = builder.with_file(path)?;
        }
        builder.with_env().build()
    }

    /// API base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Location of the persisted bearer token
    pub fn token_path(&self) -> &Path {
        &self.token_path
    }

    /// Get the full URL for an API path
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Keys accepted in the TOML config file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    base_url: Option<String>,
    token_path: Option<PathBuf>,
}

/// Builder for ClientConfig
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    token_path: Option<PathBuf>,
}

impl ClientConfigBuilder {
    /// Set the API base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the token file location
    pub fn token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    /// Fill unset values from a TOML document
    pub fn with_toml_str(mut self, raw: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(raw)?;
        if let Some(url) = file.base_url {
            self.base_url = Some(url);
        }
        if let Some(path) = file.token_path {
            self.token_path = Some(path);
        }
        Ok(self)
    }

    /// Fill values from a TOML file on disk
    pub fn with_file(self, path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.with_toml_str(&raw)
    }

    /// Apply `EASYBLOG_API_BASE` and `EASYBLOG_TOKEN_PATH` when set
    pub fn with_env(mut self) -> Self {
        if let Some(url) = non_empty_env(BASE_URL_ENV) {
            self.base_url = Some(url);
        }
        if let Some(path) = non_empty_env(TOKEN_PATH_ENV) {
            self.token_path = Some(PathBuf::from(path));
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let base_url = match self.base_url {
            Some(url) => normalize_base_url(&url)?,
            None => DEFAULT_BASE_URL.to_string(),
        };
        let token_path = self.token_path.unwrap_or_else(default_token_path);
        Ok(ClientConfig {
            base_url,
            token_path,
        })
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed =
        url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl(format!("{raw}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ConfigError::InvalidUrl(format!(
            "{raw}: unsupported scheme '{other}'"
        ))),
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn default_token_path() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
    path.push("easyblog");
    path.push(TOKEN_KEY);
    path
}
