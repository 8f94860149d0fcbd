use std::fmt;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;

use crate::validation::FieldErrors;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub enum Resource {
    ViewPoint,
    ViewPoints,
    Photo,
    Category,
    Categories,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::ViewPoint => write!(f, "viewpoint"),
            Resource::ViewPoints => write!(f, "viewpoints"),
            Resource::Photo => write!(f, "photo"),
            Resource::Category => write!(f, "category"),
            Resource::Categories => write!(f, "categories"),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub enum AppSuccess {
    Created(Resource),
    Updated(Resource),
    Deleted(Resource),
    UploadedPhoto,
}

impl AppSuccess {
    pub fn message(&self) -> String {
        match self {
            AppSuccess::Created(resource) => format!("The {resource} was created."),
            AppSuccess::Updated(resource) => format!("The {resource} was updated."),
            AppSuccess::Deleted(resource) => format!("The {resource} was deleted."),
            AppSuccess::UploadedPhoto => "The photo was uploaded.".to_string(),
        }
    }
}

/// How the page should show an error.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Presentation {
    /// Blocking message; used for every mutating action.
    Alert,
    /// Inline "Try again" on a read-only page.
    Retry,
    /// Terminal "not found" page.
    NotFound,
    /// Messages next to form inputs.
    Inline,
}

#[derive(Debug)]
pub enum AppError {
    LoadFailed(Resource),
    NotFound(Resource),
    CreateFailed(Resource),
    UpdateFailed(Resource),
    DeleteFailed(Resource),
    UploadFailed(Resource),
    Invalid(FieldErrors),
    BadUpload(String),
    /// Body that is not the JSON the endpoint expects.
    Malformed,
}

impl AppError {
    pub fn message(&self) -> String {
        match self {
            AppError::LoadFailed(resource) => format!("Failed to load {resource}."),
            AppError::NotFound(resource) => {
                let mut name = resource.to_string();
                if let Some(first) = name.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                format!("{name} not found.")
            }
            AppError::CreateFailed(resource) => format!("Failed to create {resource}."),
            AppError::UpdateFailed(resource) => format!("Failed to update {resource}."),
            AppError::DeleteFailed(resource) => format!("Failed to delete {resource}."),
            AppError::UploadFailed(resource) => format!("Failed to upload {resource}."),
            AppError::Invalid(_) => "Please fix the highlighted fields.".to_string(),
            AppError::BadUpload(reason) => reason.clone(),
            AppError::Malformed => "The request could not be read.".to_string(),
        }
    }

    pub fn presentation(&self) -> Presentation {
        match self {
            AppError::LoadFailed(_) => Presentation::Retry,
            AppError::NotFound(_) => Presentation::NotFound,
            AppError::Invalid(_) => Presentation::Inline,
            AppError::CreateFailed(_)
            | AppError::UpdateFailed(_)
            | AppError::DeleteFailed(_)
            | AppError::UploadFailed(_)
            | AppError::BadUpload(_)
            | AppError::Malformed => Presentation::Alert,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::LoadFailed(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadUpload(_) | AppError::Malformed => StatusCode::BAD_REQUEST,
            AppError::CreateFailed(_)
            | AppError::UpdateFailed(_)
            | AppError::DeleteFailed(_)
            | AppError::UploadFailed(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = json!({
            "message": self.message(),
            "presentation": self.presentation(),
        });
        if let AppError::Invalid(errors) = self {
            body["errors"] = json!(errors);
        }

        HttpResponse::build(self.status_code()).json(body)
    }
}
