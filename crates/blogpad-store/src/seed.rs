// ABOUTME: One-shot bootstrap of the post collection from seed data on first run.
// ABOUTME: Seeds come from the bundled posts.json, a local file, or an HTTP URL.

use std::path::PathBuf;

use blogpad_core::{Post, PostStore};
use thiserror::Error;

/// Seed posts compiled into the binary.
pub const BUNDLED_SEED: &str = include_str!("../seed/posts.json");

/// Errors that can occur while fetching seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Where to read the initial posts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    Bundled,
    File(PathBuf),
    Url(String),
}

impl SeedSource {
    /// Interpret a configured value: http(s) URLs are fetched, anything
    /// else is a file path.
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            SeedSource::Url(value.to_string())
        } else {
            SeedSource::File(PathBuf::from(value))
        }
    }
}

impl std::fmt::Display for SeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedSource::Bundled => write!(f, "bundled posts.json"),
            SeedSource::File(path) => write!(f, "{}", path.display()),
            SeedSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Read the seed posts without touching the store.
pub async fn fetch_seed(source: &SeedSource) -> Result<Vec<Post>, SeedError> {
    let posts = match source {
        SeedSource::Bundled => serde_json::from_str(BUNDLED_SEED)?,
        SeedSource::File(path) => {
            let contents = tokio::fs::read_to_string(path).await?;
            serde_json::from_str(&contents)?
        }
        SeedSource::Url(url) => {
            reqwest::get(url)
                .await?
                .error_for_status()?
                .json::<Vec<Post>>()
                .await?
        }
    };
    Ok(posts)
}

/// What the bootstrap step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bootstrap {
    /// The store already held a collection; nothing was read.
    AlreadyInitialized,
    /// The seed was loaded and saved with this many posts.
    Seeded(usize),
    /// The seed could not be read or saved; nothing was persisted.
    Failed,
}

/// Populate an uninitialized store from `source`. A failed fetch or save
/// leaves the store uninitialized, so the next start tries again.
pub async fn bootstrap(store: &mut PostStore, source: &SeedSource) -> Bootstrap {
    if store.is_initialized() {
        tracing::debug!("post store already initialized, skipping seed");
        return Bootstrap::AlreadyInitialized;
    }

    let posts = match fetch_seed(source).await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::error!("error loading seed posts from {}: {}", source, e);
            return Bootstrap::Failed;
        }
    };

    if let Err(e) = store.save(&posts) {
        tracing::error!("failed to persist seed posts: {}", e);
        return Bootstrap::Failed;
    }

    tracing::info!(count = posts.len(), "seeded posts from {}", source);
    Bootstrap::Seeded(posts.len())
}
