//! HTTP handlers.
//!
//! Every protected handler resolves its caller once with `AuthGuard`, wraps it
//! in an `Access` facade and hands both to the service, which performs the
//! authorization checks next to the data they concern.

pub mod account;
pub mod auth;
pub mod availability;
pub mod call_up;
pub mod due;
pub mod event;
pub mod statistic;
pub mod team;

use axum::http::HeaderMap;

use crate::server::{
    error::AppError, middleware::auth::AuthGuard, model::account::Account, state::AppState,
};

/// Page size used when a listing request leaves `entries` out.
fn default_entries() -> u64 {
    10
}

/// Resolves the account behind the request's bearer token.
async fn resolve_caller(state: &AppState, headers: &HeaderMap) -> Result<Account, AppError> {
    AuthGuard::new(&state.db, &state.tokens, headers)
        .resolve()
        .await
}
