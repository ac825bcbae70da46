//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - The `/73split` route and its request handler
//! - Health check route
//! - Response types

pub mod handler;
pub mod response;
pub mod routes;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use handler::SplitHandler;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Split request handler.
    pub split: Arc<SplitHandler>,
}

impl AppState {
    /// Creates the state around a split handler.
    #[must_use]
    pub fn new(split: SplitHandler) -> Self {
        Self {
            split: Arc::new(split),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
