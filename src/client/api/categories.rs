use std::fmt::Display;

use super::{page_query, BlogApi, DataEnvelope};
use crate::client::http::RequestOptions;
use crate::shared::error::Result;
use crate::shared::types::{Category, CategoryPayload, Page};

impl BlogApi {
    /// `GET /categories?page&size` -> unwraps `data`
    pub async fn fetch_categories(&self, page: Page) -> Result<Vec<Category>> {
        let envelope: DataEnvelope<Category> = self
            .http
            .request_as(
                &format!("/categories?{}", page_query(page)),
                RequestOptions::get(),
            )
            .await?;
        Ok(envelope.data)
    }

    /// Create a category.
    ///
    /// The server mounts creation on `POST /categories/:id` and ignores the
    /// id segment, so a placeholder `0` is sent.
    pub async fn create_category(&self, payload: &CategoryPayload) -> Result<()> {
        self.http
            .request("/categories/0", RequestOptions::post(payload)?)
            .await?;
        Ok(())
    }

    /// `PUT /categories/{id}`
    pub async fn update_category(&self, id: impl Display, payload: &CategoryPayload) -> Result<()> {
        self.http
            .request(&format!("/categories/{}", id), RequestOptions::put(payload)?)
            .await?;
        Ok(())
    }

    /// `DELETE /categories/{id}`
    pub async fn delete_category(&self, id: impl Display) -> Result<()> {
        self.http
            .request(&format!("/categories/{}", id), RequestOptions::delete())
            .await?;
        Ok(())
    }
}
