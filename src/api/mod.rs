//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/board", get(board_handler))
        .route("/countdown", get(countdown_handler))
        .route("/prayers", get(prayers_handler))
        // Input events feeding the decorative effects
        .route("/pointer", post(pointer_handler))
        .route("/cards/:id/pointer", post(card_pointer_handler))
        .route("/cards/:id/visible", post(card_visible_handler))
        .route("/elements/:id/key", post(key_handler))
        .route("/elements/:id/click", post(click_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
