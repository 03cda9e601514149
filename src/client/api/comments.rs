use std::fmt::Display;

use super::{BlogApi, ItemsEnvelope};
use crate::client::http::RequestOptions;
use crate::shared::error::Result;
use crate::shared::types::{Comment, NewComment};

impl BlogApi {
    /// `GET /posts/{id}/comments` -> unwraps `items`
    pub async fn fetch_comments(&self, post_id: impl Display) -> Result<Vec<Comment>> {
        let envelope: ItemsEnvelope<Comment> = self
            .http
            .request_as(
                &format!("/posts/{}/comments", post_id),
                RequestOptions::get(),
            )
            .await?;
        Ok(envelope.items)
    }

    /// `POST /comments`
    pub async fn post_comment(&self, post_id: u64, content: impl Into<String>) -> Result<Comment> {
        let body = NewComment {
            post_id,
            content: content.into(),
        };
        self.http
            .request_as("/comments", RequestOptions::post(&body)?)
            .await
    }

    /// `DELETE /comments/{id}`
    pub async fn delete_comment(&self, id: impl Display) -> Result<()> {
        self.http
            .request(&format!("/comments/{}", id), RequestOptions::delete())
            .await?;
        Ok(())
    }
}
