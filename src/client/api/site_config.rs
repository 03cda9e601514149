use serde::Deserialize;
use serde_json::json;

use super::{page_query, query, BlogApi, DataEnvelope};
use crate::client::http::RequestOptions;
use crate::shared::error::Result;
use crate::shared::types::{ConfigEntry, Page};

#[derive(Debug, Deserialize)]
struct EntryEnvelope {
    #[serde(default)]
    data: Option<ConfigEntry>,
}

impl BlogApi {
    /// `GET /config?key=` -> unwraps `data`; `None` when the envelope is empty
    pub async fn get_config(&self, key: &str) -> Result<Option<ConfigEntry>> {
        let path = format!("/config?{}", query(&[("key", key.to_string())]));
        let envelope: EntryEnvelope = self.http.request_as(&path, RequestOptions::get()).await?;
        Ok(envelope.data)
    }

    /// `GET /config/all?page&size` (admin)
    pub async fn list_config(&self, page: Page) -> Result<Vec<ConfigEntry>> {
        let envelope: DataEnvelope<ConfigEntry> = self
            .http
            .request_as(
                &format!("/config/all?{}", page_query(page)),
                RequestOptions::get(),
            )
            .await?;
        Ok(envelope.data)
    }

    /// `POST /config`
    pub async fn create_config(&self, key: &str, value: &str) -> Result<()> {
        let body = ConfigEntry {
            key: key.to_string(),
            value: value.to_string(),
        };
        self.http
            .request("/config", RequestOptions::post(&body)?)
            .await?;
        Ok(())
    }

    /// `PUT /config?key=`
    pub async fn update_config(&self, key: &str, value: &str) -> Result<()> {
        let path = format!("/config?{}", query(&[("key", key.to_string())]));
        self.http
            .request(&path, RequestOptions::put(&json!({ "value": value }))?)
            .await?;
        Ok(())
    }

    /// `DELETE /config?key=`
    pub async fn delete_config(&self, key: &str) -> Result<()> {
        let path = format!("/config?{}", query(&[("key", key.to_string())]));
        self.http.request(&path, RequestOptions::delete()).await?;
        Ok(())
    }
}
