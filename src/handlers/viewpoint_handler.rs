use actix_web::{delete, get, post, put, web, HttpResponse};
use futures_util::future::join;
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{serde_as, NoneAsEmptyString};
use tracing::{error, info, warn};

use super::load_categories;
use crate::api::CatalogApi;
use crate::display::{DisplayPhoto, Listing};
use crate::message::{AppError, AppSuccess, Resource};
use crate::models::{Category, ViewPoint};
use crate::query::ViewPointQuery;
use crate::validation::{SubmitError, ViewPointDraft, ViewPointForm, ViewPointPatchDraft};

/// Query string of the list page, as typed into the filter bar.
#[serde_as]
#[derive(Deserialize, Debug, Default)]
pub struct ListParams {
    pub search: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub category_id: Option<i32>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl From<ListParams> for ViewPointQuery {
    fn from(params: ListParams) -> Self {
        let mut query = ViewPointQuery::new().with_category(params.category_id);
        if let Some(search) = params.search {
            query = query.with_search(search);
        }
        if let Some(limit) = params.limit {
            query = query.with_limit(limit);
        }
        if let Some(offset) = params.offset {
            query = query.with_offset(offset);
        }
        query
    }
}

#[derive(Serialize, Debug)]
struct HomePage {
    recent: Listing,
}

#[derive(Serialize, Debug)]
struct ViewPointsPage {
    query: ViewPointQuery,
    listing: Listing,
    categories: Vec<Category>,
}

#[derive(Serialize, Debug)]
struct DetailPage {
    viewpoint: ViewPoint,
    hero: DisplayPhoto,
}

#[derive(Serialize, Debug)]
struct FormPage {
    id: Option<i32>,
    form: ViewPointForm,
    categories: Vec<Category>,
}

#[get("/")]
pub async fn home(api: web::Data<dyn CatalogApi>) -> HttpResponse {
    let recent = match api.list_viewpoints(&ViewPointQuery::recent()).await {
        Ok(page) => Listing::new(&page.viewpoints, page.total),
        Err(e) => {
            warn!("Failed to load viewpoints: {e}");
            Listing::Empty
        }
    };

    HttpResponse::Ok().json(HomePage { recent })
}

#[get("/viewpoints")]
pub async fn list_viewpoints(
    api: web::Data<dyn CatalogApi>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse, AppError> {
    let query = ViewPointQuery::from(params.into_inner());

    let (page, categories) = join(
        api.list_viewpoints(&query),
        load_categories(api.get_ref()),
    )
    .await;

    let page = page.map_err(|e| {
        error!("Failed to load viewpoints: {e}");
        AppError::LoadFailed(Resource::ViewPoints)
    })?;

    Ok(HttpResponse::Ok().json(ViewPointsPage {
        listing: Listing::new(&page.viewpoints, page.total),
        query,
        categories,
    }))
}

#[get("/viewpoints/new")]
pub async fn new_viewpoint_form(api: web::Data<dyn CatalogApi>) -> HttpResponse {
    HttpResponse::Ok().json(FormPage {
        id: None,
        form: ViewPointForm::new(),
        categories: load_categories(api.get_ref()).await,
    })
}

#[post("/viewpoints")]
pub async fn create_viewpoint(
    api: web::Data<dyn CatalogApi>,
    payload: web::Json<ViewPointDraft>,
) -> Result<HttpResponse, AppError> {
    let api = api.get_ref();
    let mut form = ViewPointForm::from_draft(payload.into_inner());

    let created = form
        .submit(|data| async move { api.create_viewpoint(&data).await })
        .await
        .map_err(|e| match e {
            SubmitError::Invalid(errors) => AppError::Invalid(errors),
            SubmitError::Rejected(_) => AppError::CreateFailed(Resource::ViewPoint),
        })?;

    info!(id = created.id, "Created viewpoint");
    Ok(HttpResponse::Created().json(json!({
        "message": AppSuccess::Created(Resource::ViewPoint).message(),
        "viewpoint": created,
    })))
}

/// Missing and unreachable look the same here: both end on "not found".
async fn fetch_viewpoint(api: &dyn CatalogApi, id: i32) -> Result<ViewPoint, AppError> {
    api.get_viewpoint(id).await.map_err(|e| {
        error!("Failed to load viewpoint {id}: {e}");
        AppError::NotFound(Resource::ViewPoint)
    })
}

#[get("/viewpoints/{id}")]
pub async fn viewpoint_detail(
    api: web::Data<dyn CatalogApi>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let viewpoint = fetch_viewpoint(api.get_ref(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(DetailPage {
        hero: DisplayPhoto::for_photos(&viewpoint.photos),
        viewpoint,
    }))
}

#[get("/viewpoints/{id}/edit")]
pub async fn edit_viewpoint_form(
    api: web::Data<dyn CatalogApi>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let api = api.get_ref();
    let viewpoint = fetch_viewpoint(api, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(FormPage {
        id: Some(viewpoint.id),
        form: ViewPointForm::from_viewpoint(&viewpoint),
        categories: load_categories(api).await,
    }))
}

#[put("/viewpoints/{id}")]
pub async fn update_viewpoint(
    api: web::Data<dyn CatalogApi>,
    path: web::Path<i32>,
    payload: web::Json<ViewPointPatchDraft>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let patch = payload.into_inner().validate().map_err(AppError::Invalid)?;

    match api.update_viewpoint(id, &patch).await {
        Ok(viewpoint) => Ok(HttpResponse::Ok().json(json!({
            "message": AppSuccess::Updated(Resource::ViewPoint).message(),
            "viewpoint": viewpoint,
        }))),
        Err(e) => {
            error!("Failed to update viewpoint {id}: {e}");
            Err(AppError::UpdateFailed(Resource::ViewPoint))
        }
    }
}

#[delete("/viewpoints/{id}")]
pub async fn delete_viewpoint(
    api: web::Data<dyn CatalogApi>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match api.delete_viewpoint(id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "message": AppSuccess::Deleted(Resource::ViewPoint).message(),
        }))),
        Err(e) => {
            error!("Failed to delete viewpoint {id}: {e}");
            Err(AppError::DeleteFailed(Resource::ViewPoint))
        }
    }
}
