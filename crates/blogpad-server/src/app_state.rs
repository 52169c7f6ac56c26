// ABOUTME: Shared application state for the blogpad HTTP server.
// ABOUTME: Holds the single BlogApp behind a mutex and builds it from the data directory at startup.

use std::path::Path;
use std::sync::Arc;

use blogpad_core::{BlogApp, MemorySlot, PostStore, StoreError};
use blogpad_store::{FileSlot, SeedSource, bootstrap};
use tokio::sync::Mutex;

/// Shared application state accessible by all Axum handlers. Every request
/// locks `app` for one action plus the render that follows it.
pub struct AppState {
    pub app: Mutex<BlogApp>,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(app: BlogApp) -> Self {
        Self {
            app: Mutex::new(app),
        }
    }

    /// Open the post store in `home`, seeding it on first run, and load the
    /// application from it.
    pub async fn open(home: &Path, seed: &SeedSource) -> Result<Self, StoreError> {
        let slot = FileSlot::open(home)?;
        let mut store = PostStore::new(slot);
        let outcome = bootstrap(&mut store, seed).await;
        tracing::debug!(?outcome, home = %home.display(), "post store ready");

        Ok(Self::new(BlogApp::new(store)))
    }

    /// An application backed by an in-memory slot, for tests and previews.
    pub fn in_memory() -> Self {
        Self::new(BlogApp::new(PostStore::new(MemorySlot::new())))
    }
}
