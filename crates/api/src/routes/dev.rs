//! Development-only routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use crate::seed;

/// Creates the development routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dev/seed", post(seed_demo_data))
}

/// POST `/dev/seed` - Seed the demo chart of accounts and entries.
///
/// Seeding only runs against an empty registry; a second call is a no-op.
/// The write lock covers the emptiness check and the seeding itself, so
/// two concurrent calls cannot both seed.
async fn seed_demo_data(State(state): State<AppState>) -> impl IntoResponse {
    let mut books = state.books.write().await;

    if !books.list_accounts().is_empty() {
        return Json(json!({
            "message": "Already seeded, skipping.",
            "seeded": false,
        }))
        .into_response();
    }

    match seed::seed_demo_books(&mut books) {
        Ok(()) => {
            info!("Demo data seeded");
            Json(json!({
                "message": "Seed completed",
                "seeded": true,
            }))
            .into_response()
        }
        Err(e) => {
            // Unreachable with the fixed demo data, but never swallowed.
            error!(error = %e, "Failed to seed demo data");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "INTERNAL_ERROR",
                    "message": "An error occurred",
                })),
            )
                .into_response()
        }
    }
}
