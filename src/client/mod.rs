//! EasyBlog API Client Module
//!
//! Everything that talks to the server, leaves first:
//!
//! - **`token_store`** - persisted bearer token (`TokenStore` trait, file and memory stores)
//! - **`http`** - request wrapper: headers, base URL, error/empty-body normalization
//! - **`password`** - SHA-256 hex digests for login/register
//! - **`api`** - typed domain functions on `BlogApi`
//! - **`session`** - who is logged in, derived from the profile endpoint
//! - **`site_config`** - the `enable_register` feature flag
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use easyblog::client::{BlogApi, FileTokenStore, HashedPassword, Session};
//! use easyblog::shared::ClientConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let tokens = Arc::new(FileTokenStore::new(config.token_path()));
//! let api = BlogApi::from_config(config, tokens);
//!
//! let session = Session::init(api.clone()).await;
//! if !session.is_authenticated() {
//!     session
//!         .login("ann@example.com", &HashedPassword::from_plaintext("hunter2"))
//!         .await?;
//! }
//! let page = api.fetch_posts(&Default::default()).await?;
//! println!("{} posts", page.total);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod http;
pub mod password;
pub mod session;
pub mod site_config;
pub mod token_store;

pub use api::BlogApi;
pub use http::{HttpClient, RequestOptions};
pub use password::{sha256_hex, HashedPassword};
pub use session::{Session, SessionState};
pub use site_config::SiteConfig;
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
