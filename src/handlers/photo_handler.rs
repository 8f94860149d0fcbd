use actix_multipart::Multipart;
use actix_web::{delete, post, web, HttpResponse};
use futures_util::StreamExt;
use serde_json::json;
use tracing::{error, info, warn};

use crate::api::CatalogApi;
use crate::message::{AppError, AppSuccess, Resource};
use crate::models::PhotoUpload;

fn malformed(e: impl std::fmt::Display) -> AppError {
    warn!("Malformed photo upload: {e}");
    AppError::BadUpload("The upload could not be read.".to_string())
}

/// Collects the `file` and `caption` parts of the upload form.
async fn read_upload(mut payload: Multipart) -> Result<PhotoUpload, AppError> {
    let mut upload: Option<PhotoUpload> = None;
    let mut caption: Option<String> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(malformed)?;

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk.map_err(malformed)?);
        }

        match field.name() {
            "file" => {
                let file_name = field
                    .content_disposition()
                    .get_filename()
                    .unwrap_or_default()
                    .to_string();
                if file_name.is_empty() {
                    continue;
                }

                let mut file = PhotoUpload::new(file_name, bytes);
                if let Some(content_type) = field.content_type() {
                    file = file.with_content_type(content_type.clone());
                }
                upload = Some(file);
            }
            "caption" => caption = String::from_utf8(bytes).ok(),
            _ => {}
        }
    }

    let mut upload =
        upload.ok_or_else(|| AppError::BadUpload("No file selected.".to_string()))?;
    upload.caption = caption;
    Ok(upload)
}

#[post("/viewpoints/{id}/photos")]
pub async fn upload_photo(
    api: web::Data<dyn CatalogApi>,
    path: web::Path<i32>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let viewpoint_id = path.into_inner();
    let upload = read_upload(payload).await?;

    match api.upload_photo(viewpoint_id, upload).await {
        Ok(photo) => {
            info!(viewpoint_id, photo_id = photo.id, "Uploaded photo");
            Ok(HttpResponse::Created().json(json!({
                "message": AppSuccess::UploadedPhoto.message(),
                "photo": photo,
            })))
        }
        Err(e) => {
            error!("Failed to upload photo: {e}");
            Err(AppError::UploadFailed(Resource::Photo))
        }
    }
}

#[delete("/photos/{id}")]
pub async fn delete_photo(
    api: web::Data<dyn CatalogApi>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match api.delete_photo(id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "message": AppSuccess::Deleted(Resource::Photo).message(),
        }))),
        Err(e) => {
            error!("Failed to delete photo {id}: {e}");
            Err(AppError::DeleteFailed(Resource::Photo))
        }
    }
}
