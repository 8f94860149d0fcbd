use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::api::CatalogApi;
use crate::display::MapView;
use crate::message::{AppError, Resource};
use crate::query::ViewPointQuery;

#[get("/map")]
pub async fn map(api: web::Data<dyn CatalogApi>) -> Result<HttpResponse, AppError> {
    match api.list_viewpoints(&ViewPointQuery::new()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(MapView::for_viewpoints(&page.viewpoints))),
        Err(e) => {
            error!("Failed to load viewpoints: {e}");
            Err(AppError::LoadFailed(Resource::ViewPoints))
        }
    }
}
