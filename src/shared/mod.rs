//! Shared Module
//!
//! Types used across the client: the blog domain model and request payloads,
//! the error taxonomy, and client configuration. Everything here is plain data
//! and carries no I/O beyond reading a config file.

/// Blog entities and request/response payloads
pub mod types;

/// Client error types
pub mod error;

/// Client configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{ClientConfig, ClientConfigBuilder, ConfigError};
pub use error::{ClientError, TokenStoreError};
pub use types::{
    Category, CategoryPayload, Comment, ConfigEntry, Friend, FriendPayload, LoginResponse, Page,
    Post, PostPage, PostPayload, PostQuery, PostStatus, RegisterResponse, SessionUser, Tag,
    TagPayload, User, UserRole,
};
