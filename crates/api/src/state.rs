//! Application state shared by the request handlers.

use std::sync::Arc;

use picus_core::storage::ItemRepository;
use picus_storage::InMemoryRepository;

/// Shared application state.
///
/// Cloned for each request; the repository is constructed once at startup
/// and injected here.
#[derive(Clone)]
pub struct AppState {
    /// Item repository backing every handler.
    pub items: Arc<dyn ItemRepository>,
}

impl AppState {
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }
}

impl Default for AppState {
    /// State over an empty in-memory repository.
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}
