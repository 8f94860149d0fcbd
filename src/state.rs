//! Display state of the viewpoint list page.
//!
//! Every search is stamped with a [`Ticket`]. Responses are applied only if
//! their ticket is still the newest one issued, so a slow answer to an old
//! search can never overwrite the answer to the search the user typed last.
//!
//! The JSON service in `main` answers each request on its own and keeps no
//! per-user state. [`CatalogSession`] is for clients that embed the library and
//! hold one list page open across several searches, such as an interactive
//! front end.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error};

use crate::api::{ApiError, CatalogApi};
use crate::display::Listing;
use crate::models::{ViewPoint, ViewPointPage};
use crate::query::ViewPointQuery;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingState {
    query: ViewPointQuery,
    viewpoints: Vec<ViewPoint>,
    total: u64,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl ListingState {
    pub fn new() -> Self {
        ListingState::default()
    }

    /// Records the new search as the user's latest intent.
    pub fn issue(&mut self, query: ViewPointQuery) -> Ticket {
        self.generation += 1;
        self.query = query;
        self.loading = true;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Applies a finished request. Returns `false` when the response was
    /// stale and dropped.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<ViewPointPage, String>) -> bool {
        if !self.is_current(ticket) {
            debug!(ticket = ticket.0, latest = self.generation, "Dropping stale listing response");
            return false;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.viewpoints = page.viewpoints;
                self.total = page.total;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Drops a deleted viewpoint, its photos going with it.
    pub fn remove_viewpoint(&mut self, id: i32) -> Option<ViewPoint> {
        let index = self.viewpoints.iter().position(|vp| vp.id == id)?;
        self.total = self.total.saturating_sub(1);
        Some(self.viewpoints.remove(index))
    }

    pub fn remove_photo(&mut self, photo_id: i32) -> bool {
        for viewpoint in &mut self.viewpoints {
            let before = viewpoint.photos.len();
            viewpoint.photos.retain(|p| p.id != photo_id);
            if viewpoint.photos.len() != before {
                return true;
            }
        }
        false
    }

    pub fn query(&self) -> &ViewPointQuery {
        &self.query
    }

    pub fn viewpoints(&self) -> &[ViewPoint] {
        &self.viewpoints
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn listing(&self) -> Listing {
        Listing::new(&self.viewpoints, self.total)
    }
}

/// Runs list-page actions against a backend and keeps the display state.
///
/// The lock is only held between awaits, never across one.
pub struct CatalogSession<A: ?Sized> {
    api: Arc<A>,
    state: Mutex<ListingState>,
}

impl<A: CatalogApi + ?Sized> CatalogSession<A> {
    pub fn new(api: Arc<A>) -> Self {
        CatalogSession {
            api,
            state: Mutex::new(ListingState::new()),
        }
    }

    fn state(&self) -> MutexGuard<'_, ListingState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> ListingState {
        self.state().clone()
    }

    /// Loads `query` and applies the answer if no newer search was issued in
    /// the meantime. Returns whether the answer was applied.
    pub async fn search(&self, query: ViewPointQuery) -> bool {
        let ticket = self.state().issue(query.clone());

        let result = self.api.list_viewpoints(&query).await.map_err(|e| {
            error!("Failed to load viewpoints: {e}");
            "Failed to load viewpoints".to_string()
        });

        self.state().resolve(ticket, result)
    }

    /// Deletes a viewpoint on the backend, then drops it from the list.
    pub async fn delete_viewpoint(&self, id: i32) -> Result<(), ApiError> {
        if let Err(e) = self.api.delete_viewpoint(id).await {
            error!("Failed to delete viewpoint: {e}");
            return Err(e);
        }

        self.state().remove_viewpoint(id);
        Ok(())
    }

    pub async fn delete_photo(&self, photo_id: i32) -> Result<(), ApiError> {
        if let Err(e) = self.api.delete_photo(photo_id).await {
            error!("Failed to delete photo: {e}");
            return Err(e);
        }

        self.state().remove_photo(photo_id);
        Ok(())
    }
}
