//! API route definitions.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use tresor_core::teller::TellerError;
use tresor_shared::AppError;

use crate::AppState;

pub mod accounts;
pub mod health;
pub mod users;

/// Creates the API router with all routes.
pub fn api_routes() -> axum::Router<AppState> {
    axum::Router::new()
        .merge(health::routes())
        .merge(users::routes())
        .merge(accounts::routes())
}

/// Renders a teller rejection with its classified status and code.
pub(crate) fn teller_rejection(err: &TellerError) -> Response {
    let status = StatusCode::from_u16(err.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string()
        })),
    )
        .into_response()
}

/// Renders an application error with its classified status and code.
pub(crate) fn app_rejection(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string()
        })),
    )
        .into_response()
}

/// Renders a boundary validation failure.
pub(crate) fn validation_rejection(message: &str) -> Response {
    app_rejection(&AppError::Validation(message.to_string()))
}
