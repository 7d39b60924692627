//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod accounts;
pub mod common;
pub mod dev;
pub mod health;
pub mod journal;
pub mod reports;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(accounts::routes())
        .merge(journal::routes())
        .merge(reports::routes())
        .merge(dev::routes())
}
