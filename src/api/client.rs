use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::ErrorBody;
use super::{ApiError, CatalogApi};
use crate::models::{
    CategoriesEnvelope, Category, CategoryEnvelope, CategoryFormData, CategoryPatch, Photo,
    PhotoEnvelope, PhotoUpload, ViewPoint, ViewPointEnvelope, ViewPointFormData, ViewPointPage,
    ViewPointPatch,
};
use crate::query::ViewPointQuery;

/// `CatalogApi` over HTTP. JSON everywhere except photo uploads.
#[derive(Clone, Debug)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpCatalog::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpCatalog { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn checked(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    Ok(checked(response).await?.json::<T>().await?)
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    async fn list_viewpoints(&self, query: &ViewPointQuery) -> Result<ViewPointPage, ApiError> {
        let pairs = query.to_pairs();
        debug!(?pairs, "GET /viewpoints");

        let response = self
            .client
            .get(self.url("/viewpoints"))
            .query(&pairs)
            .send()
            .await?;

        decode(response).await
    }

    async fn get_viewpoint(&self, id: i32) -> Result<ViewPoint, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/viewpoints/{id}")))
            .send()
            .await?;

        decode::<ViewPointEnvelope>(response).await.map(|e| e.viewpoint)
    }

    async fn create_viewpoint(&self, data: &ViewPointFormData) -> Result<ViewPoint, ApiError> {
        let response = self
            .client
            .post(self.url("/viewpoints"))
            .json(data)
            .send()
            .await?;

        decode::<ViewPointEnvelope>(response).await.map(|e| e.viewpoint)
    }

    async fn update_viewpoint(
        &self,
        id: i32,
        patch: &ViewPointPatch,
    ) -> Result<ViewPoint, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/viewpoints/{id}")))
            .json(patch)
            .send()
            .await?;

        decode::<ViewPointEnvelope>(response).await.map(|e| e.viewpoint)
    }

    async fn delete_viewpoint(&self, id: i32) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/viewpoints/{id}")))
            .send()
            .await?;

        checked(response).await.map(|_| ())
    }

    async fn upload_photo(&self, viewpoint_id: i32, upload: PhotoUpload) -> Result<Photo, ApiError> {
        let caption = upload.caption_part().map(str::to_string);

        let mut part = Part::bytes(upload.bytes).file_name(upload.file_name);
        if let Some(content_type) = &upload.content_type {
            part = part.mime_str(content_type.as_ref())?;
        }

        let mut form = Form::new().part("file", part);
        if let Some(caption) = caption {
            form = form.text("caption", caption);
        }

        let response = self
            .client
            .post(self.url(&format!("/viewpoints/{viewpoint_id}/photos")))
            .multipart(form)
            .send()
            .await?;

        decode::<PhotoEnvelope>(response).await.map(|e| e.photo)
    }

    async fn delete_photo(&self, id: i32) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/photos/{id}")))
            .send()
            .await?;

        checked(response).await.map(|_| ())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let response = self.client.get(self.url("/categories")).send().await?;

        decode::<CategoriesEnvelope>(response).await.map(|e| e.categories)
    }

    async fn get_category(&self, id: i32) -> Result<Category, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/categories/{id}")))
            .send()
            .await?;

        decode::<CategoryEnvelope>(response).await.map(|e| e.category)
    }

    async fn create_category(&self, data: &CategoryFormData) -> Result<Category, ApiError> {
        let response = self
            .client
            .post(self.url("/categories"))
            .json(data)
            .send()
            .await?;

        decode::<CategoryEnvelope>(response).await.map(|e| e.category)
    }

    async fn update_category(&self, id: i32, patch: &CategoryPatch) -> Result<Category, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/categories/{id}")))
            .json(patch)
            .send()
            .await?;

        decode::<CategoryEnvelope>(response).await.map(|e| e.category)
    }

    async fn delete_category(&self, id: i32) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/categories/{id}")))
            .send()
            .await?;

        checked(response).await.map(|_| ())
    }
}
