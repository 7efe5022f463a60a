//! # Routes
//!
//! Axum router for the checkout gateway: one checkout endpoint, six fixed
//! marketing pages, and a static-dir fallback for assets.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /                                   - index.html
/// - GET  /success, /cancel                   - post-checkout pages
/// - GET  /workshop1..3                       - workshop pages
/// - POST /create-checkout-session/{price_id} - create checkout session
/// - GET  /health                             - health check
/// - anything else is served from the static dir
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let workshops = static_dir.join("workshops");

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/create-checkout-session/{price_id}",
            post(handlers::create_checkout_session),
        )
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/success", ServeFile::new(static_dir.join("success.html")))
        .route_service("/cancel", ServeFile::new(static_dir.join("cancel.html")))
        .route_service("/workshop1", ServeFile::new(workshops.join("workshop1.html")))
        .route_service("/workshop2", ServeFile::new(workshops.join("workshop2.html")))
        .route_service("/workshop3", ServeFile::new(workshops.join("workshop3.html")))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
