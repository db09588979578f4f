//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for users and bank accounts
//! - Request validation and typed mutation construction
//! - Translation of teller rejections into HTTP responses

pub mod routes;

use std::sync::Arc;

use axum::Router;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use tresor_store::Bank;

/// Application state shared across handlers.
///
/// A single `RwLock` guards both repositories: reads run concurrently,
/// every mutation holds the write lock across the teller's whole
/// check-then-commit sequence.
#[derive(Clone)]
pub struct AppState {
    /// The bank aggregate (user directory + account ledger).
    pub bank: Arc<RwLock<Bank>>,
}

impl AppState {
    /// Wraps a bank into shared state.
    #[must_use]
    pub fn new(bank: Bank) -> Self {
        Self {
            bank: Arc::new(RwLock::new(bank)),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
