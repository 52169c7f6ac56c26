// ABOUTME: Entry point for the blogpad binary.
// ABOUTME: Parses CLI arguments, initializes tracing, opens the post store, and serves the blog over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use blogpad_server::{AppState, BlogpadConfig, create_router};
use blogpad_store::SeedSource;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "blogpad", version, about = "Local-first blog notebook")]
struct Cli {
    /// Data directory holding the post slot (overrides BLOGPAD_HOME)
    #[arg(long)]
    home: Option<PathBuf>,

    /// Address to listen on (overrides BLOGPAD_BIND)
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Seed posts file or http(s) URL used on first run (overrides BLOGPAD_SEED)
    #[arg(long)]
    seed: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(
                "blogpad=debug,blogpad_core=debug,blogpad_store=debug,blogpad_server=debug,tower_http=debug",
            )
        }))
        .init();

    let mut config = BlogpadConfig::from_env()?;
    if let Some(home) = cli.home {
        config.home = home;
    }
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }
    if let Some(seed) = cli.seed {
        config.seed = SeedSource::parse(&seed);
    }

    tracing::info!(home = %config.home.display(), seed = %config.seed, "blogpad starting up");

    let state = AppState::open(&config.home, &config.seed)
        .await
        .with_context(|| format!("opening post store in {}", config.home.display()))?;
    let router = create_router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    tracing::info!(addr = %config.bind, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("blogpad stopped");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let (Ok(mut sigint), Ok(mut sigterm)) = (
            signal(SignalKind::interrupt()),
            signal(SignalKind::terminate()),
        ) else {
            tracing::warn!("failed to install signal handlers, falling back to ctrl-c");
            let _ = tokio::signal::ctrl_c().await;
            return;
        };
        tokio::select! {
            _ = sigint.recv() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for ctrl-c");
        }
    }
}
