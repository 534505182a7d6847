use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::account::AccountRepository,
    error::{auth::AuthError, AppError},
    middleware::token::TokenKeys,
    model::account::Account,
};

const BEARER_PREFIX: &str = "Bearer ";

/// Resolves the caller of a request from its bearer token.
///
/// The token only proves who the caller claims to be. Role and team always come
/// from the stored account so that changes made after the token was issued take
/// effect on the next request.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenKeys, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Resolves the account that made the request.
    ///
    /// # Returns
    /// - `Ok(Account)` - The stored account named by a valid token
    /// - `Err(AuthError::Unauthenticated)` - Missing, malformed, expired or badly signed token
    /// - `Err(AuthError::IdentityNotFound)` - Token is valid but its account no longer exists
    /// - `Err(DbErr)` - Database error during lookup
    pub async fn resolve(&self) -> Result<Account, AppError> {
        let token = self.bearer_token()?;
        let claims = self.tokens.verify(token)?;

        let Some(account) = AccountRepository::new(self.db)
            .find_by_email(&claims.sub)
            .await?
        else {
            return Err(AuthError::IdentityNotFound(claims.sub).into());
        };

        Ok(account)
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        let Some(value) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::Unauthenticated(
                "missing authorization header".to_string(),
            ));
        };

        let value = value.to_str().map_err(|_| {
            AuthError::Unauthenticated("authorization header is not valid ASCII".to_string())
        })?;

        match value.strip_prefix(BEARER_PREFIX).map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(AuthError::Unauthenticated(
                "authorization header is not a bearer token".to_string(),
            )),
        }
    }
}
