// ABOUTME: Route definitions for the blogpad web UI.
// ABOUTME: Maps each user action to a handler that mutates the app and re-renders the page.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::app_state::SharedState;
use crate::web;

/// Build the complete Axum router with all routes and shared state.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(web::index))
        .route("/health", get(health))
        .route("/home", post(web::home))
        .route("/posts/new", post(web::new_post_form))
        .route("/posts/{id}/open", post(web::open_post))
        .route("/current/edit", post(web::edit_post_form))
        .route("/current/delete", post(web::delete_post))
        .route("/current/comments", post(web::add_comment))
        .route("/form/save", post(web::save_post))
        .route("/form/cancel", post(web::cancel_form))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler. Returns 200 OK with a simple JSON body.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
