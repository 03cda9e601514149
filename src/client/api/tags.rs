use std::fmt::Display;

use super::{page_query, BlogApi, DataEnvelope};
use crate::client::http::RequestOptions;
use crate::shared::error::Result;
use crate::shared::types::{Page, Tag, TagPayload};

impl BlogApi {
    /// `GET /tags?page&size` -> unwraps `data`
    pub async fn fetch_tags(&self, page: Page) -> Result<Vec<Tag>> {
        let envelope: DataEnvelope<Tag> = self
            .http
            .request_as(&format!("/tags?{}", page_query(page)), RequestOptions::get())
            .await?;
        Ok(envelope.data)
    }

    /// `POST /tags`
    pub async fn create_tag(&self, payload: &TagPayload) -> Result<()> {
        self.http
            .request("/tags", RequestOptions::post(payload)?)
            .await?;
        Ok(())
    }

    /// `PUT /tags/{id}`
    pub async fn update_tag(&self, id: impl Display, payload: &TagPayload) -> Result<()> {
        self.http
            .request(&format!("/tags/{}", id), RequestOptions::put(payload)?)
            .await?;
        Ok(())
    }

    /// `DELETE /tags/{id}`
    pub async fn delete_tag(&self, id: impl Display) -> Result<()> {
        self.http
            .request(&format!("/tags/{}", id), RequestOptions::delete())
            .await?;
        Ok(())
    }
}
