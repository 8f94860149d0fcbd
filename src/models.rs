pub mod category;
pub mod envelope;
pub mod photo;
pub mod viewpoint;

pub use category::{Category, CategoryFormData, CategoryPatch};
pub use envelope::{
    CategoriesEnvelope, CategoryEnvelope, PhotoEnvelope, ViewPointEnvelope, ViewPointPage,
};
pub use photo::{Photo, PhotoUpload};
pub use viewpoint::{ViewPoint, ViewPointFormData, ViewPointPatch};
