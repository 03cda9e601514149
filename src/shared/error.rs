//! Client Error Types
//!
//! This module defines the error types surfaced by the EasyBlog client.
//! Every domain call returns the wrapper's failure unchanged, so callers
//! (a UI action handler, the CLI) only ever match on [`ClientError`].
//!
//! # Error Categories
//!
//! - `Network` - transport failure before a response arrived
//! - `Status` - the server answered with a non-2xx status
//! - `Decode` - a 2xx JSON body did not have the expected shape
//! - `InvalidHeader` - a header could not be put on the wire
//! - `InvalidPassword` - a password digest was not 64 hex characters
//! - `TokenStore` - the bearer token could not be persisted
//!
//! A 2xx body that is not JSON at all (typically an empty body) is *not* an
//! error: the request wrapper turns it into `{}`.
//!
//! # Usage
//!
//! ```rust
//! use easyblog::shared::error::ClientError;
//!
//! let error = ClientError::status(401, "invalid credentials");
//! assert_eq!(error.to_string(), "invalid credentials");
//! assert!(error.is_unauthorized());
//! ```
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the HTTP wrapper and every domain API function.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or transport failure (connection refused, DNS, TLS, ...)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP response.
    ///
    /// The message is the raw response body, or the status text when the
    /// body was empty. Display prints the message verbatim.
    #[error("{message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body text or status text
        message: String,
    },

    /// A successful JSON body did not match the expected type
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A header name or value could not be encoded
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Password digest was not a SHA-256 hex string
    #[error("Password must be a 64 character SHA-256 hex digest")]
    InvalidPassword,

    /// Token persistence failure
    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),
}

impl ClientError {
    /// Create a status error
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// HTTP status code, if the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the server rejected the credentials (401)
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }
}

/// Errors raised while persisting the bearer token.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    /// Reading, writing or removing the token file failed
    #[error("Token file {path}: {source}")]
    Io {
        /// Location of the token file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl TokenStoreError {
    /// Wrap an I/O error for the given token path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the client
pub type Result<T> = std::result::Result<T, ClientError>;
