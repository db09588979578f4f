//! Bank account routes.
//!
//! Handlers validate request shape (field presence, amount ranges) and
//! build typed inputs; every decision about the mutation itself belongs
//! to the teller.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, warn};

use tresor_core::teller::{
    CreateAccountInput, TellerService, MAX_SINGLE_AMOUNT, MINIMUM_BALANCE,
};
use tresor_shared::types::money::round_cents;
use tresor_shared::types::{AccountId, UserId};
use tresor_store::Bank;

use crate::routes::{teller_rejection, validation_rejection};
use crate::AppState;

/// Creates the account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/{user_id}/accounts", post(create_account))
        .route("/users/{user_id}/accounts", get(list_accounts))
        .route("/accounts", get(list_all_accounts))
        .route("/users/{user_id}/accounts/{account_id}", get(get_account))
        .route("/users/{user_id}/accounts/{account_id}", put(replace_account))
        .route(
            "/users/{user_id}/accounts/{account_id}/deposit",
            put(deposit),
        )
        .route(
            "/users/{user_id}/accounts/{account_id}/withdraw",
            put(withdraw),
        )
        .route(
            "/users/{user_id}/accounts/{account_id}",
            delete(remove_account),
        )
        .route("/reset-accounts", post(reset_accounts))
}

/// Request body for creating an account.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// Display name.
    pub account_name: String,
    /// Free-form description.
    pub description: String,
    /// Opening balance.
    pub balance: Decimal,
}

/// Request body for replacing account fields.
#[derive(Debug, Deserialize)]
pub struct ReplaceAccountRequest {
    /// New display name; absent or empty keeps the stored value.
    pub account_name: Option<String>,
    /// New description; absent or empty keeps the stored value.
    pub description: Option<String>,
    /// Requested absolute balance.
    pub balance: Decimal,
}

/// Request body for deposits and withdrawals.
#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    /// Amount to move.
    pub amount: Decimal,
}

/// POST `/users/{user_id}/accounts` - Create a bank account.
async fn create_account(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
    Json(payload): Json<CreateAccountRequest>,
) -> impl IntoResponse {
    if payload.account_name.is_empty() {
        return validation_rejection("Account name is required");
    }
    if payload.description.is_empty() {
        return validation_rejection("Description is required");
    }
    let balance = round_cents(payload.balance);
    if balance < MINIMUM_BALANCE || balance > MAX_SINGLE_AMOUNT {
        return validation_rejection(
            "Balance must be a minimum of 100.00 and a maximum of 10,000.00",
        );
    }

    let mut bank = state.bank.write().await;
    let Bank { directory, ledger } = &mut *bank;

    match TellerService::create_account(
        directory,
        ledger,
        UserId::new(user_id),
        CreateAccountInput {
            account_name: payload.account_name,
            description: payload.description,
            initial_balance: balance,
        },
    ) {
        Ok(account) => {
            info!(
                owner = %account.owner,
                account_id = %account.id,
                "Account created"
            );
            (StatusCode::CREATED, Json(account)).into_response()
        }
        Err(err) => teller_rejection(&err),
    }
}

/// GET `/users/{user_id}/accounts` - List the owner's accounts.
async fn list_accounts(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> impl IntoResponse {
    let bank = state.bank.read().await;
    match TellerService::list_accounts(&bank.directory, &bank.ledger, UserId::new(user_id)) {
        Ok(accounts) => Json(accounts).into_response(),
        Err(err) => teller_rejection(&err),
    }
}

/// GET `/accounts` - List all accounts (demo/debug use).
async fn list_all_accounts(State(state): State<AppState>) -> impl IntoResponse {
    let bank = state.bank.read().await;
    Json(bank.ledger.list_all().to_vec()).into_response()
}

/// GET `/users/{user_id}/accounts/{account_id}` - Get a single account.
async fn get_account(
    State(state): State<AppState>,
    Path((user_id, account_id)): Path<(u64, u64)>,
) -> impl IntoResponse {
    let bank = state.bank.read().await;
    match TellerService::get_account(
        &bank.directory,
        &bank.ledger,
        UserId::new(user_id),
        AccountId::new(account_id),
    ) {
        Ok(account) => Json(account).into_response(),
        Err(err) => teller_rejection(&err),
    }
}

/// PUT `/users/{user_id}/accounts/{account_id}` - Replace account fields.
async fn replace_account(
    State(state): State<AppState>,
    Path((user_id, account_id)): Path<(u64, u64)>,
    Json(payload): Json<ReplaceAccountRequest>,
) -> impl IntoResponse {
    let mut bank = state.bank.write().await;
    let Bank { directory, ledger } = &mut *bank;

    match TellerService::replace_account_fields(
        directory,
        ledger,
        UserId::new(user_id),
        AccountId::new(account_id),
        payload.account_name,
        payload.description,
        round_cents(payload.balance),
    ) {
        Ok(account) => {
            info!(account_id = %account.id, "Account updated");
            Json(account).into_response()
        }
        Err(err) => {
            warn!(account_id, error = %err, "Account update rejected");
            teller_rejection(&err)
        }
    }
}

/// PUT `/users/{user_id}/accounts/{account_id}/deposit` - Deposit funds.
async fn deposit(
    State(state): State<AppState>,
    Path((user_id, account_id)): Path<(u64, u64)>,
    Json(payload): Json<AmountRequest>,
) -> impl IntoResponse {
    let amount = round_cents(payload.amount);
    if amount <= Decimal::ZERO || amount > MAX_SINGLE_AMOUNT {
        return validation_rejection("Deposit must be between 0.01 and 10,000.00");
    }

    let mut bank = state.bank.write().await;
    let Bank { directory, ledger } = &mut *bank;

    match TellerService::deposit(
        directory,
        ledger,
        UserId::new(user_id),
        AccountId::new(account_id),
        amount,
    ) {
        Ok(account) => {
            info!(account_id = %account.id, "Deposit committed");
            Json(account).into_response()
        }
        Err(err) => teller_rejection(&err),
    }
}

/// PUT `/users/{user_id}/accounts/{account_id}/withdraw` - Withdraw funds.
async fn withdraw(
    State(state): State<AppState>,
    Path((user_id, account_id)): Path<(u64, u64)>,
    Json(payload): Json<AmountRequest>,
) -> impl IntoResponse {
    let amount = round_cents(payload.amount);
    if amount <= Decimal::ZERO {
        return validation_rejection("Withdrawal amount must be positive");
    }

    let mut bank = state.bank.write().await;
    let Bank { directory, ledger } = &mut *bank;

    match TellerService::withdraw(
        directory,
        ledger,
        UserId::new(user_id),
        AccountId::new(account_id),
        amount,
    ) {
        Ok(account) => {
            info!(account_id = %account.id, "Withdrawal committed");
            Json(account).into_response()
        }
        Err(err) => teller_rejection(&err),
    }
}

/// DELETE `/users/{user_id}/accounts/{account_id}` - Delete an account.
async fn remove_account(
    State(state): State<AppState>,
    Path((user_id, account_id)): Path<(u64, u64)>,
) -> impl IntoResponse {
    let mut bank = state.bank.write().await;
    let Bank { directory, ledger } = &mut *bank;

    match TellerService::delete_account(
        directory,
        ledger,
        UserId::new(user_id),
        AccountId::new(account_id),
    ) {
        Ok(()) => {
            info!(account_id, "Account deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => teller_rejection(&err),
    }
}

/// POST `/reset-accounts` - Replace all accounts with demo data.
async fn reset_accounts(State(state): State<AppState>) -> impl IntoResponse {
    let mut bank = state.bank.write().await;
    bank.ledger.reset_with_demo_data();

    info!("Reset accounts");
    Json(bank.ledger.list_all().to_vec()).into_response()
}
