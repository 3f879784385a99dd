//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::UrlStore;
use crate::infrastructure::memory::InMemoryUrlStore;

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn UrlStore>>,
    /// Configured public base URL; `None` means derive it from the request.
    pub base_url: Option<String>,
}

impl AppState {
    /// Builds state around an existing store.
    pub fn new(store: Arc<dyn UrlStore>, base_url: Option<String>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store)),
            base_url,
        }
    }

    /// Builds state backed by a fresh, empty in-memory store.
    pub fn in_memory(base_url: Option<String>) -> Self {
        Self::new(Arc::new(InMemoryUrlStore::new()), base_url)
    }
}
