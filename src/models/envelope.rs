//! Response bodies of the remote backend. Each resource is wrapped under a
//! named key.

use serde::{Deserialize, Serialize};

use super::{Category, Photo, ViewPoint};

/// One page of the viewpoint collection. `total` counts every match of the
/// filters, not just the rows in `viewpoints`.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct ViewPointPage {
    #[serde(default)]
    pub viewpoints: Vec<ViewPoint>,
    #[serde(default)]
    pub total: u64,
}

impl ViewPointPage {
    pub fn is_empty(&self) -> bool {
        self.viewpoints.is_empty()
    }
}

#[derive(Deserialize, Debug)]
pub struct ViewPointEnvelope {
    pub viewpoint: ViewPoint,
}

#[derive(Deserialize, Debug)]
pub struct PhotoEnvelope {
    pub photo: Photo,
}

#[derive(Deserialize, Debug)]
pub struct CategoryEnvelope {
    pub category: Category,
}

#[derive(Deserialize, Debug)]
pub struct CategoriesEnvelope {
    #[serde(default)]
    pub categories: Vec<Category>,
}
