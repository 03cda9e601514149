//! Friend links (blogroll). Writes require an admin token.

use std::fmt::Display;

use super::{page_query, BlogApi, DataEnvelope};
use crate::client::http::RequestOptions;
use crate::shared::error::Result;
use crate::shared::types::{Friend, FriendPayload, Page};

impl BlogApi {
    /// `GET /friends?page&size` -> unwraps `data`
    pub async fn fetch_friends(&self, page: Page) -> Result<Vec<Friend>> {
        let envelope: DataEnvelope<Friend> = self
            .http
            .request_as(
                &format!("/friends?{}", page_query(page)),
                RequestOptions::get(),
            )
            .await?;
        Ok(envelope.data)
    }

    /// `POST /friends`; the server answers with an empty body
    pub async fn create_friend(&self, payload: &FriendPayload) -> Result<()> {
        self.http
            .request("/friends", RequestOptions::post(payload)?)
            .await?;
        Ok(())
    }

    /// `PUT /friends/{id}`
    pub async fn update_friend(&self, id: impl Display, payload: &FriendPayload) -> Result<Friend> {
        self.http
            .request_as(&format!("/friends/{}", id), RequestOptions::put(payload)?)
            .await
    }

    /// `DELETE /friends/{id}`
    pub async fn delete_friend(&self, id: impl Display) -> Result<()> {
        self.http
            .request(&format!("/friends/{}", id), RequestOptions::delete())
            .await?;
        Ok(())
    }
}
