//! HTTP API layer with Axum routes for the Tally bookkeeping service.
//!
//! This crate provides:
//! - REST API routes over the core bookkeeping state
//! - Demo-data seeding for development
//! - Static dashboard serving
//! - Configuration management

pub mod config;
pub mod routes;
pub mod seed;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tally_core::Books;

/// Application state shared across handlers.
///
/// The bookkeeping state is one instance for the whole process. Mutating
/// handlers take the write lock so validation and mutation happen as a
/// single atomic unit; read-only handlers share the read lock and can
/// never observe a partially posted entry.
#[derive(Clone)]
pub struct AppState {
    /// The shared bookkeeping state.
    pub books: Arc<RwLock<Books>>,
}

impl AppState {
    /// Creates state around an empty bookkeeping instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            books: Arc::new(RwLock::new(Books::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the main application router.
///
/// API routes are mounted at the root; anything else falls through to the
/// static dashboard served from `public_dir`.
pub fn create_router(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
