//! User management routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use tresor_shared::types::UserId;
use tresor_store::{NewUser, UserChanges};

use crate::routes::{app_rejection, validation_rejection};
use crate::AppState;

/// Creates the user routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users", get(list_users))
        .route("/users/{user_id}", get(get_user))
        .route("/users/{user_id}", put(update_user))
        .route("/users/{user_id}", delete(remove_user))
        .route("/reset-users", post(reset_users))
}

/// Request body for creating a user.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Login-style handle.
    pub user_name: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub family_name: String,
    /// Initial activity flag (default: true).
    pub is_active: Option<bool>,
}

/// Request body for updating a user. Absent or empty fields are kept.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    /// New handle.
    pub user_name: Option<String>,
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub family_name: Option<String>,
    /// New activity flag.
    pub is_active: Option<bool>,
}

/// POST `/users` - Create a user.
async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> impl IntoResponse {
    if payload.user_name.is_empty() {
        return validation_rejection("User name is required");
    }
    if payload.first_name.is_empty() {
        return validation_rejection("First name is required");
    }
    if payload.family_name.is_empty() {
        return validation_rejection("Family name is required");
    }

    let mut bank = state.bank.write().await;
    let user = bank.directory.insert(NewUser {
        user_name: payload.user_name,
        first_name: payload.first_name,
        family_name: payload.family_name,
        is_active: payload.is_active,
    });

    info!(user_id = %user.id, "User created");
    (StatusCode::CREATED, Json(user)).into_response()
}

/// GET `/users` - List all users (demo use).
async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    let bank = state.bank.read().await;
    Json(bank.directory.list().to_vec()).into_response()
}

/// GET `/users/{user_id}` - Get a single user.
async fn get_user(State(state): State<AppState>, Path(user_id): Path<u64>) -> impl IntoResponse {
    let bank = state.bank.read().await;
    match bank.directory.find(UserId::new(user_id)) {
        Some(user) => Json(user.clone()).into_response(),
        None => app_rejection(&tresor_shared::AppError::NotFound(format!(
            "User {user_id} not found"
        ))),
    }
}

/// PUT `/users/{user_id}` - Update an existing user.
async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
    Json(payload): Json<UpdateUserRequest>,
) -> impl IntoResponse {
    let mut bank = state.bank.write().await;
    let updated = bank.directory.update(
        UserId::new(user_id),
        UserChanges {
            user_name: payload.user_name,
            first_name: payload.first_name,
            family_name: payload.family_name,
            is_active: payload.is_active,
        },
    );

    match updated {
        Some(user) => {
            info!(user_id = %user.id, "User updated");
            Json(user).into_response()
        }
        None => app_rejection(&tresor_shared::AppError::NotFound(format!(
            "User {user_id} not found"
        ))),
    }
}

/// DELETE `/users/{user_id}` - Delete a user.
///
/// Blocked with 409 while the user still owns accounts.
async fn remove_user(State(state): State<AppState>, Path(user_id): Path<u64>) -> impl IntoResponse {
    let mut bank = state.bank.write().await;
    match bank.remove_user(UserId::new(user_id)) {
        Ok(()) => {
            info!(user_id, "User deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => app_rejection(&err),
    }
}

/// POST `/reset-users` - Replace all users with demo data.
async fn reset_users(State(state): State<AppState>) -> impl IntoResponse {
    let mut bank = state.bank.write().await;
    bank.directory.reset_with_demo_data();

    info!("Reset users");
    Json(bank.directory.list().to_vec()).into_response()
}
