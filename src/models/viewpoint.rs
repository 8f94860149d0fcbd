use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};

use super::{Category, Photo};

#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ViewPoint {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>,
    pub category_id: Option<i32>,
    pub category: Option<Category>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub rating: f64,
    #[serde(default = "default_public")]
    pub is_public: bool,
    #[serde(default)]
    pub photos: Vec<Photo>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

fn default_public() -> bool {
    true
}

/// Complete payload sent on create. Never carries an id.
#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ViewPointFormData {
    pub name: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>,
    pub category_id: Option<i32>,
    pub rating: f64,
    pub is_public: bool,
}

/// Partial update. Only fields that are `Some` go on the wire; nullable
/// columns use a double option so `Some(None)` clears them.
#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct ViewPointPatch {
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub elevation: Option<Option<f64>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub category_id: Option<Option<i32>>,
    pub rating: Option<f64>,
    pub is_public: Option<bool>,
}

impl ViewPointPatch {
    pub fn is_empty(&self) -> bool {
        *self == ViewPointPatch::default()
    }
}

impl From<ViewPointFormData> for ViewPointPatch {
    fn from(data: ViewPointFormData) -> Self {
        ViewPointPatch {
            name: Some(data.name),
            description: Some(data.description),
            latitude: Some(data.latitude),
            longitude: Some(data.longitude),
            elevation: Some(data.elevation),
            category_id: Some(data.category_id),
            rating: Some(data.rating),
            is_public: Some(data.is_public),
        }
    }
}
