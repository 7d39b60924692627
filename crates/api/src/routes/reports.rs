//! Report routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};

use crate::AppState;
use crate::routes::common::ledger_error_response;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/trial-balance", get(trial_balance))
        .route("/reports/ledger/{account_id}", get(account_ledger))
}

/// GET `/reports/trial-balance` - One row per account, sorted by code.
async fn trial_balance(State(state): State<AppState>) -> impl IntoResponse {
    let books = state.books.read().await;
    Json(books.trial_balance())
}

/// GET `/reports/ledger/{account_id}` - Ledger view with running balance.
async fn account_ledger(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> impl IntoResponse {
    let books = state.books.read().await;
    match books.account_ledger(&account_id) {
        Ok(ledger) => Json(ledger).into_response(),
        Err(e) => ledger_error_response(&e),
    }
}
