//! Filters for `GET /viewpoints`.
//!
//! A filter that is `None` puts no constraint on its dimension and is left off
//! the query string entirely. In particular an unset category never turns into
//! a "category is null" filter.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// How many viewpoints the home page shows.
pub const RECENT_LIMIT: u32 = 6;

#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct ViewPointQuery {
    pub category_id: Option<i32>,
    pub search: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ViewPointQuery {
    pub fn new() -> Self {
        ViewPointQuery::default()
    }

    /// Most recently created viewpoints, as listed on the home page.
    pub fn recent() -> Self {
        ViewPointQuery::new().with_limit(RECENT_LIMIT)
    }

    /// Sets the search text. An empty search box means "no search"; anything
    /// else is forwarded verbatim.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = if search.is_empty() { None } else { Some(search) };
        self
    }

    /// `None` is the "All categories" choice.
    pub fn with_category(mut self, category_id: Option<i32>) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Query string pairs in a stable order. Unset filters are absent.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(category_id) = self.category_id {
            pairs.push(("category_id", category_id.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }

        pairs
    }

    pub fn is_unfiltered(&self) -> bool {
        self.to_pairs().is_empty()
    }
}

/// "3 viewpoints found", "1 viewpoint found".
pub fn results_label(count: usize) -> String {
    if count == 1 {
        "1 viewpoint found".to_string()
    } else {
        format!("{count} viewpoints found")
    }
}
