//! Authentication endpoints
//!
//! `login` is the only domain call with a side effect: it writes the token
//! returned by the server into the token store. `authenticate` is the same
//! request without the write, for callers that decide later whether to keep
//! the token. `register` never touches the store; callers log in afterwards.

use super::BlogApi;
use crate::client::http::RequestOptions;
use crate::client::password::HashedPassword;
use crate::shared::error::Result;
use crate::shared::types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, User};

impl BlogApi {
    /// `POST /auth/login`; stores the returned token
    pub async fn login(&self, email: &str, password: &HashedPassword) -> Result<LoginResponse> {
        let response = self.authenticate(email, password).await?;
        self.store_login_token(email, &response)?;
        Ok(response)
    }

    /// `POST /auth/login` without touching the token store
    pub async fn authenticate(
        &self,
        email: &str,
        password: &HashedPassword,
    ) -> Result<LoginResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.as_str().to_string(),
        };
        self.http
            .request_as("/auth/login", RequestOptions::post(&body)?)
            .await
    }

    /// Persist the token of a login response; a missing or empty token
    /// leaves the store as it is
    pub fn store_login_token(&self, email: &str, response: &LoginResponse) -> Result<()> {
        match response.token.as_deref().filter(|t| !t.is_empty()) {
            Some(token) => {
                self.http.tokens().set(Some(token))?;
                tracing::info!("Logged in as {}", email);
            }
            None => tracing::warn!("Login response for {} carried no token", email),
        }
        Ok(())
    }

    /// `POST /auth/register`
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &HashedPassword,
    ) -> Result<RegisterResponse> {
        let body = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.as_str().to_string(),
        };
        self.http
            .request_as("/auth/register", RequestOptions::post(&body)?)
            .await
    }

    /// `GET /auth/profile`
    pub async fn profile(&self) -> Result<User> {
        self.http
            .request_as("/auth/profile", RequestOptions::get())
            .await
    }

    /// Clear the stored token; no network call
    pub fn logout(&self) -> Result<()> {
        self.http.tokens().clear()?;
        tracing::info!("Logged out");
        Ok(())
    }
}
