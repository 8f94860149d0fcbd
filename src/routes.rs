use actix_web::{error, web, HttpRequest};
use tracing::warn;

use crate::handlers::category_handler::{
    create_category, delete_category, get_category, list_categories, update_category,
};
use crate::handlers::map_handler::map;
use crate::handlers::photo_handler::{delete_photo, upload_photo};
use crate::handlers::viewpoint_handler::{
    create_viewpoint, delete_viewpoint, edit_viewpoint_form, home, list_viewpoints,
    new_viewpoint_form, update_viewpoint, viewpoint_detail,
};
use crate::message::AppError;

fn json_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = req.path(), "Unreadable JSON body: {err}");
    AppError::Malformed.into()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .service(home)
        .service(list_viewpoints)
        // before `/viewpoints/{id}` so "new" is not taken for an id
        .service(new_viewpoint_form)
        .service(create_viewpoint)
        .service(viewpoint_detail)
        .service(edit_viewpoint_form)
        .service(update_viewpoint)
        .service(delete_viewpoint)
        .service(upload_photo)
        .service(delete_photo)
        .service(map)
        .service(list_categories)
        .service(get_category)
        .service(create_category)
        .service(update_category)
        .service(delete_category);
}
