use std::fmt::Display;

use serde_json::json;

use super::{decode_list, query, BlogApi};
use crate::client::http::RequestOptions;
use crate::shared::error::Result;
use crate::shared::types::{Comment, Post, PostPage, PostPayload, PostQuery};

impl BlogApi {
    /// `GET /posts?page&size&q` -> `{total, items}`
    pub async fn fetch_posts(&self, params: &PostQuery) -> Result<PostPage> {
        let mut pairs = vec![
            ("page", params.page.page.to_string()),
            ("size", params.page.size.to_string()),
        ];
        if let Some(q) = params.q.as_deref().filter(|q| !q.is_empty()) {
            pairs.push(("q", q.to_string()));
        }
        let path = format!("/posts?{}", query(&pairs));
        self.http.request_as(&path, RequestOptions::get()).await
    }

    /// `GET /posts/{id}`
    pub async fn fetch_post(&self, id: impl Display) -> Result<Post> {
        self.http
            .request_as(&format!("/posts/{}", id), RequestOptions::get())
            .await
    }

    /// `GET /posts/category/{id}` -> bare array
    pub async fn fetch_posts_by_category(&self, id: impl Display) -> Result<Vec<Post>> {
        let value = self
            .http
            .request(&format!("/posts/category/{}", id), RequestOptions::get())
            .await?;
        decode_list(value)
    }

    /// `GET /posts/tag/{id}` -> bare array
    pub async fn fetch_posts_by_tag(&self, id: impl Display) -> Result<Vec<Post>> {
        let value = self
            .http
            .request(&format!("/posts/tag/{}", id), RequestOptions::get())
            .await?;
        decode_list(value)
    }

    /// `POST /posts`
    pub async fn create_post(&self, payload: &PostPayload) -> Result<Post> {
        self.http
            .request_as("/posts", RequestOptions::post(payload)?)
            .await
    }

    /// `PUT /posts/{id}`; empty id lists clear the post's categories/tags
    pub async fn update_post(&self, id: impl Display, payload: &PostPayload) -> Result<Post> {
        self.http
            .request_as(&format!("/posts/{}", id), RequestOptions::put(payload)?)
            .await
    }

    /// `DELETE /posts/{id}` (also drops the post's comments server side)
    pub async fn delete_post(&self, id: impl Display) -> Result<()> {
        self.http
            .request(&format!("/posts/{}", id), RequestOptions::delete())
            .await?;
        Ok(())
    }

    /// `PUT /posts/{id}/publish`
    pub async fn publish_post(&self, id: impl Display, publish: bool) -> Result<Post> {
        let body = json!({ "publish": publish });
        self.http
            .request_as(
                &format!("/posts/{}/publish", id),
                RequestOptions::put(&body)?,
            )
            .await
    }

    /// Fetch a post and its comments concurrently; both must succeed
    pub async fn fetch_post_with_comments(&self, id: impl Display) -> Result<(Post, Vec<Comment>)> {
        let id = id.to_string();
        futures_util::try_join!(self.fetch_post(&id), self.fetch_comments(&id))
    }
}
