//! The remote collection API this app is a client of.

pub mod client;
pub mod error;

use async_trait::async_trait;

use crate::models::{
    Category, CategoryFormData, CategoryPatch, Photo, PhotoUpload, ViewPoint, ViewPointFormData,
    ViewPointPage, ViewPointPatch,
};
use crate::query::ViewPointQuery;

pub use client::HttpCatalog;
pub use error::ApiError;

#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_viewpoints(&self, query: &ViewPointQuery) -> Result<ViewPointPage, ApiError>;

    async fn get_viewpoint(&self, id: i32) -> Result<ViewPoint, ApiError>;

    async fn create_viewpoint(&self, data: &ViewPointFormData) -> Result<ViewPoint, ApiError>;

    async fn update_viewpoint(&self, id: i32, patch: &ViewPointPatch)
        -> Result<ViewPoint, ApiError>;

    async fn delete_viewpoint(&self, id: i32) -> Result<(), ApiError>;

    async fn upload_photo(&self, viewpoint_id: i32, upload: PhotoUpload) -> Result<Photo, ApiError>;

    async fn delete_photo(&self, id: i32) -> Result<(), ApiError>;

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    async fn get_category(&self, id: i32) -> Result<Category, ApiError>;

    async fn create_category(&self, data: &CategoryFormData) -> Result<Category, ApiError>;

    async fn update_category(&self, id: i32, patch: &CategoryPatch) -> Result<Category, ApiError>;

    async fn delete_category(&self, id: i32) -> Result<(), ApiError>;
}
