pub mod category_handler;
pub mod map_handler;
pub mod photo_handler;
pub mod viewpoint_handler;

use tracing::error;

use crate::api::CatalogApi;
use crate::models::Category;

/// Category list for filters and form selects. A failure only costs the
/// dropdown its options.
pub(crate) async fn load_categories(api: &dyn CatalogApi) -> Vec<Category> {
    match api.list_categories().await {
        Ok(categories) => categories,
        Err(e) => {
            error!("Failed to load categories: {e}");
            Vec::new()
        }
    }
}
