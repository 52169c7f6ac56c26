// ABOUTME: Configuration loading and validation for the blogpad server.
// ABOUTME: Reads BLOGPAD_* environment variables for the data directory, bind address, and seed source.

use std::net::SocketAddr;
use std::path::PathBuf;

use blogpad_store::SeedSource;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BLOGPAD_BIND is not a valid socket address: {0}")]
    InvalidBind(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct BlogpadConfig {
    pub home: PathBuf,
    pub bind: SocketAddr,
    pub seed: SeedSource,
}

impl BlogpadConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - BLOGPAD_HOME: data directory (default: ~/.blogpad)
    /// - BLOGPAD_BIND: socket address to bind (default: 127.0.0.1:7340)
    /// - BLOGPAD_SEED: seed posts file or http(s) URL (default: bundled posts)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let home = var("BLOGPAD_HOME").map(PathBuf::from).unwrap_or_else(|| {
            var("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("/tmp"))
                .join(".blogpad")
        });

        let bind_str = var("BLOGPAD_BIND").unwrap_or_else(|| "127.0.0.1:7340".to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        let seed = var("BLOGPAD_SEED")
            .map(|s| SeedSource::parse(&s))
            .unwrap_or(SeedSource::Bundled);

        Ok(Self { home, bind, seed })
    }
}
