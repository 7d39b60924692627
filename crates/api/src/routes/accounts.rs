//! Account management routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use tracing::info;

use crate::AppState;
use crate::routes::common::{bad_request, ledger_error_response};
use tally_core::AccountType;

/// Creates the account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(list_accounts))
        .route("/accounts", post(create_account))
}

/// Request body for creating an account.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// Account code (must be unique).
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type: ASSET, LIABILITY, EQUITY, INCOME, EXPENSE.
    #[serde(rename = "type")]
    pub account_type: String,
}

/// GET `/accounts` - List accounts sorted by code.
async fn list_accounts(State(state): State<AppState>) -> impl IntoResponse {
    let books = state.books.read().await;
    Json(books.list_accounts())
}

/// POST `/accounts` - Create an account.
async fn create_account(
    State(state): State<AppState>,
    Json(payload): Json<CreateAccountRequest>,
) -> impl IntoResponse {
    if payload.code.is_empty() || payload.name.is_empty() || payload.account_type.is_empty() {
        return bad_request("MISSING_FIELDS", "code, name, type are required");
    }

    let Ok(account_type) = payload.account_type.parse::<AccountType>() else {
        return bad_request(
            "INVALID_ACCOUNT_TYPE",
            "Invalid account type. Must be one of: ASSET, LIABILITY, EQUITY, INCOME, EXPENSE",
        );
    };

    let mut books = state.books.write().await;
    match books.create_account(&payload.code, &payload.name, account_type) {
        Ok(account) => {
            info!(
                account_id = %account.id,
                code = %account.code,
                "Account created"
            );
            (StatusCode::CREATED, Json(account)).into_response()
        }
        Err(e) => ledger_error_response(&e),
    }
}
