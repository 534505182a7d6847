//! Error types and their HTTP responses.
//!
//! `AppError` is what services and handlers return. Authorization failures live in
//! `AuthError` and keep their own status mapping; everything that is not the
//! client's fault collapses into a logged 500 with a generic body.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Error returned by services and handlers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or unparsable environment variable at startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Caller could not be resolved or was denied. Rendered as 401 or 403.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// SeaORM failure, logged and rendered as 500.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Password hashing or verification failure.
    #[error(transparent)]
    PasswordErr(#[from] bcrypt::BcryptError),

    /// Failure to sign an access token.
    #[error(transparent)]
    TokenErr(#[from] jsonwebtoken::errors::Error),

    /// Socket or listener failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Target does not exist, or a masked read. Rendered as 404.
    #[error("{0}")]
    NotFound(String),

    /// Payload failed validation. Rendered as 400.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with existing state, such as a duplicate email.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Unexpected state. The message is logged, the client gets a generic 500.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Shorthand for an access denial with the given reason.
    pub fn forbidden(reason: impl Into<String>) -> Self {
        AuthError::Forbidden(reason.into()).into()
    }
}

/// Renders `{"error": "..."}` with the status matching the variant.
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs any displayable error and answers with a generic 500.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
