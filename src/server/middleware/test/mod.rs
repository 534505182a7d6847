use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, token::TokenKeys},
    model::account::Account,
};
use test_utils::{builder::TestBuilder, factory};

mod resolve;

const SECRET: &str = "middleware-test-secret";

fn keys() -> TokenKeys {
    TokenKeys::new(SECRET, 1)
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

fn is_unauthenticated(result: &Result<Account, AppError>) -> bool {
    matches!(
        result,
        Err(AppError::AuthErr(AuthError::Unauthenticated(_)))
    )
}
