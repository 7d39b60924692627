//! Shared response helpers for route handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use tally_core::LedgerError;

/// Maps a core ledger error to a client-facing JSON response.
///
/// Every core error carries its own status code and machine-readable code;
/// the body is `{ "error": <code>, "message": <display message> }`. Core
/// errors are never swallowed: whatever the ledger rejects is surfaced to
/// the caller verbatim.
pub fn ledger_error_response(err: &LedgerError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::BAD_REQUEST);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string(),
        })),
    )
        .into_response()
}

/// Builds a 400 response for input rejected before the core is invoked.
pub fn bad_request(error: &'static str, message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": error,
            "message": message,
        })),
    )
        .into_response()
}
