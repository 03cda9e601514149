//! Site Config Context
//!
//! Feature flags fetched once at startup. Only `enable_register` is consumed.
//! Any failure counts as "disabled"; there is no retry or revalidation.

use crate::client::api::BlogApi;

/// Key of the registration flag
pub const ENABLE_REGISTER_KEY: &str = "enable_register";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// `None` until loaded
    pub enable_register: Option<bool>,
}

impl SiteConfig {
    /// Fetch the flags; the value must be exactly `"true"` to enable
    pub async fn load(api: &BlogApi) -> Self {
        let enabled = match api.get_config(ENABLE_REGISTER_KEY).await {
            Ok(entry) => entry.is_some_and(|e| e.value == "true"),
            Err(e) => {
                tracing::warn!("Failed to load {}, registration disabled: {}", ENABLE_REGISTER_KEY, e);
                false
            }
        };
        Self {
            enable_register: Some(enabled),
        }
    }

    /// Registration is off unless the server explicitly enabled it
    pub fn registration_enabled(&self) -> bool {
        self.enable_register.unwrap_or(false)
    }
}
