use serde::Serialize;

use crate::models::{Category, Photo, ViewPoint};
use crate::query::results_label;

/// Where the map looks when there is nothing to show.
pub const DEFAULT_CENTER: (f64, f64) = (20.0, 0.0);
pub const DEFAULT_ZOOM: u8 = 2;
pub const POPULATED_ZOOM: u8 = 4;

/// First photo flagged primary, else the first photo, else nothing.
///
/// Several photos may carry the flag; the earliest one wins.
pub fn primary_photo(photos: &[Photo]) -> Option<&Photo> {
    photos.iter().find(|p| p.is_primary).or_else(|| photos.first())
}

/// Image slot of a card or detail hero.
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayPhoto {
    Image { url: String, caption: Option<String> },
    Placeholder,
}

impl DisplayPhoto {
    pub fn for_photos(photos: &[Photo]) -> Self {
        match primary_photo(photos) {
            Some(photo) => DisplayPhoto::Image {
                url: photo.url.clone(),
                caption: photo.caption.clone(),
            },
            None => DisplayPhoto::Placeholder,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            DisplayPhoto::Image { url, .. } => Some(url),
            DisplayPhoto::Placeholder => None,
        }
    }
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct CategoryBadge {
    pub id: i32,
    pub name: String,
    pub color: Option<String>,
}

impl From<&Category> for CategoryBadge {
    fn from(category: &Category) -> Self {
        CategoryBadge {
            id: category.id,
            name: category.name.clone(),
            color: category.color.clone(),
        }
    }
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct ViewPointCard {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>,
    pub rating: f64,
    pub category: Option<CategoryBadge>,
    pub photo: DisplayPhoto,
    pub photo_count: usize,
}

impl From<&ViewPoint> for ViewPointCard {
    fn from(vp: &ViewPoint) -> Self {
        ViewPointCard {
            id: vp.id,
            name: vp.name.clone(),
            description: vp.description.clone(),
            latitude: vp.latitude,
            longitude: vp.longitude,
            elevation: vp.elevation,
            rating: vp.rating,
            category: vp.category.as_ref().map(CategoryBadge::from),
            photo: DisplayPhoto::for_photos(&vp.photos),
            photo_count: vp.photos.len(),
        }
    }
}

/// A list either has results or explicitly says it has none.
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Listing {
    Empty,
    Results {
        cards: Vec<ViewPointCard>,
        total: u64,
        label: String,
    },
}

impl Listing {
    pub fn new(viewpoints: &[ViewPoint], total: u64) -> Self {
        if viewpoints.is_empty() {
            return Listing::Empty;
        }

        Listing::Results {
            cards: viewpoints.iter().map(ViewPointCard::from).collect(),
            total,
            label: results_label(viewpoints.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct Marker {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub category: Option<String>,
    pub label: String,
}

impl From<&ViewPoint> for Marker {
    fn from(vp: &ViewPoint) -> Self {
        Marker {
            id: vp.id,
            name: vp.name.clone(),
            description: vp.description.clone(),
            latitude: vp.latitude,
            longitude: vp.longitude,
            category: vp.category.as_ref().map(|c| c.name.clone()),
            label: format!("{:.4}, {:.4}", vp.latitude, vp.longitude),
        }
    }
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub empty: bool,
}

impl MapView {
    /// Centers on the plain mean of latitudes and longitudes. This is a
    /// display hint, not a geodesic centroid.
    pub fn for_viewpoints(viewpoints: &[ViewPoint]) -> Self {
        if viewpoints.is_empty() {
            return MapView {
                center: DEFAULT_CENTER,
                zoom: DEFAULT_ZOOM,
                markers: Vec::new(),
                empty: true,
            };
        }

        let count = viewpoints.len() as f64;
        let latitude = viewpoints.iter().map(|vp| vp.latitude).sum::<f64>() / count;
        let longitude = viewpoints.iter().map(|vp| vp.longitude).sum::<f64>() / count;

        MapView {
            center: (latitude, longitude),
            zoom: POPULATED_ZOOM,
            markers: viewpoints.iter().map(Marker::from).collect(),
            empty: false,
        }
    }
}
