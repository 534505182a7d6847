use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No usable caller context: the bearer token is missing, malformed,
    /// expired or carries a bad signature.
    ///
    /// The detail is logged at debug level only. Results in 401 Unauthorized.
    #[error("Request is not authenticated: {0}")]
    Unauthenticated(String),

    /// The token verified but names an account that no longer exists.
    ///
    /// Results in 401 Unauthorized so clients drop the stale token.
    #[error("Account {0} referenced by the token no longer exists")]
    IdentityNotFound(String),

    /// Login attempted with an unknown email or a wrong password.
    ///
    /// Both cases share one message. Results in 401 Unauthorized.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The resolved caller lacks rights for the requested target or scope.
    ///
    /// The reason is returned to the client. Results in 403 Forbidden.
    #[error("Access denied: {0}")]
    Forbidden(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `Unauthenticated` → 401 with "Authentication required"
/// - `IdentityNotFound` → 401 with "Account not found"
/// - `InvalidCredentials` → 401 with "Invalid email or password"
/// - `Forbidden` → 403 with the denial reason
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, error) = match self {
            Self::Unauthenticated(_) => (
                StatusCode::UNAUTHORIZED,
                "Authentication required".to_string(),
            ),
            Self::IdentityNotFound(_) => (StatusCode::UNAUTHORIZED, "Account not found".to_string()),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid email or password".to_string(),
            ),
            Self::Forbidden(reason) => (StatusCode::FORBIDDEN, reason),
        };

        (status, Json(ErrorDto { error })).into_response()
    }
}
