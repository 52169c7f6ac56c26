// ABOUTME: HTTP server for blogpad, rendering the list, detail, and form screens as HTML.
// ABOUTME: Uses Axum with a single shared BlogApp instance and Askama templates.

pub mod app_state;
pub mod config;
pub mod render;
pub mod routes;
pub mod web;

pub use app_state::{AppState, SharedState};
pub use config::{BlogpadConfig, ConfigError};
pub use routes::create_router;
