use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;
use tracing::error;

use crate::api::CatalogApi;
use crate::message::{AppError, AppSuccess, Resource};
use crate::models::{CategoryFormData, CategoryPatch};
use crate::validation::{validate_category, validate_category_patch};

#[get("/categories")]
pub async fn list_categories(api: web::Data<dyn CatalogApi>) -> Result<HttpResponse, AppError> {
    match api.list_categories().await {
        Ok(categories) => Ok(HttpResponse::Ok().json(json!({ "categories": categories }))),
        Err(e) => {
            error!("Failed to load categories: {e}");
            Err(AppError::LoadFailed(Resource::Categories))
        }
    }
}

#[get("/categories/{id}")]
pub async fn get_category(
    api: web::Data<dyn CatalogApi>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match api.get_category(id).await {
        Ok(category) => Ok(HttpResponse::Ok().json(json!({ "category": category }))),
        Err(e) => {
            error!("Failed to load category {id}: {e}");
            Err(AppError::NotFound(Resource::Category))
        }
    }
}

#[post("/categories")]
pub async fn create_category(
    api: web::Data<dyn CatalogApi>,
    payload: web::Json<CategoryFormData>,
) -> Result<HttpResponse, AppError> {
    let data = payload.into_inner();

    let errors = validate_category(&data);
    if !errors.is_empty() {
        return Err(AppError::Invalid(errors));
    }

    match api.create_category(&data).await {
        Ok(category) => Ok(HttpResponse::Created().json(json!({
            "message": AppSuccess::Created(Resource::Category).message(),
            "category": category,
        }))),
        Err(e) => {
            error!("Failed to create category: {e}");
            Err(AppError::CreateFailed(Resource::Category))
        }
    }
}

#[put("/categories/{id}")]
pub async fn update_category(
    api: web::Data<dyn CatalogApi>,
    path: web::Path<i32>,
    payload: web::Json<CategoryPatch>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let patch = payload.into_inner();

    let errors = validate_category_patch(&patch);
    if !errors.is_empty() {
        return Err(AppError::Invalid(errors));
    }

    match api.update_category(id, &patch).await {
        Ok(category) => Ok(HttpResponse::Ok().json(json!({
            "message": AppSuccess::Updated(Resource::Category).message(),
            "category": category,
        }))),
        Err(e) => {
            error!("Failed to update category {id}: {e}");
            Err(AppError::UpdateFailed(Resource::Category))
        }
    }
}

#[delete("/categories/{id}")]
pub async fn delete_category(
    api: web::Data<dyn CatalogApi>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match api.delete_category(id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "message": AppSuccess::Deleted(Resource::Category).message(),
        }))),
        Err(e) => {
            error!("Failed to delete category {id}: {e}");
            Err(AppError::DeleteFailed(Resource::Category))
        }
    }
}
