//! Journal entry routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::AppState;
use crate::routes::common::{bad_request, ledger_error_response};
use tally_core::ledger::{LineInput, PostEntryInput};

/// Creates the journal routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/journal", get(list_entries))
        .route("/journal", post(post_entry))
}

/// Request body for posting a journal entry.
#[derive(Debug, Deserialize)]
pub struct PostEntryRequest {
    /// Entry date (ISO-8601, YYYY-MM-DD).
    pub date: String,
    /// Free-form description.
    pub description: String,
    /// Entry lines.
    pub lines: Vec<LineInput>,
}

/// GET `/journal` - List entries sorted by date.
async fn list_entries(State(state): State<AppState>) -> impl IntoResponse {
    let books = state.books.read().await;
    Json(books.list_entries())
}

/// POST `/journal` - Post a journal entry.
async fn post_entry(
    State(state): State<AppState>,
    Json(payload): Json<PostEntryRequest>,
) -> impl IntoResponse {
    let Ok(date) = payload.date.parse::<NaiveDate>() else {
        return bad_request("INVALID_DATE", "date must be an ISO-8601 date (YYYY-MM-DD)");
    };

    let mut books = state.books.write().await;
    match books.post_entry(PostEntryInput {
        date,
        description: payload.description,
        lines: payload.lines,
    }) {
        Ok(entry) => {
            info!(
                entry_id = %entry.id,
                date = %entry.date,
                lines = entry.lines.len(),
                "Journal entry posted"
            );
            (StatusCode::CREATED, Json(entry)).into_response()
        }
        Err(e) => ledger_error_response(&e),
    }
}
