//! EasyBlog - Client Library
//!
//! A typed client for the EasyBlog REST API: authentication, posts,
//! categories, tags, friend links, comments and site configuration.
//!
//! # Module Structure
//!
//! - **`shared`** - plain data shared by every layer
//!   - Blog entities and request payloads
//!   - Error types
//!   - Client configuration (defaults, TOML file, environment)
//!
//! - **`client`** - everything that talks to the server
//!   - Token store (file-backed or in-memory)
//!   - HTTP request wrapper
//!   - Domain API functions
//!   - Session and site-config contexts
//!
//! The `easyblog` binary (feature `cli`, on by default) is a command-line
//! front end over the same client.
//!
//! # Authentication
//!
//! A bearer token is stored after a successful login and attached to every
//! request while present. Holding a token does not mean being logged in: the
//! [`client::Session`] only reports a user after the profile endpoint
//! confirms it.
//!
//! # Concurrency
//!
//! All calls are async and independent. Several may be in flight at once
//! (for example a post and its comments); callers await all of them before
//! using the results. Nothing is cancelled and nothing times out. The token
//! store is the only shared mutable state.
//!
//! # Error Handling
//!
//! Every fallible call returns [`shared::error::ClientError`]. A non-2xx
//! response carries the server's body text as its message. A 2xx response
//! without a JSON body is treated as `{}`.

/// Shared types and data structures
pub mod shared;

/// API client, session and site config
pub mod client;
