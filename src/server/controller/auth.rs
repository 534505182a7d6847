use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, RegisterDto, TokenDto},
    },
    server::{
        error::AppError,
        model::auth::{LoginParam, RegisterParam},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with email and password.
///
/// Verifies the credentials and issues a bearer token for the account. Unknown
/// emails and wrong passwords produce the same response.
///
/// # Returns
/// - `200 OK` - Token and the logged-in account
/// - `401 Unauthorized` - Invalid email or password
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = TokenDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let issued = AuthService::new(&state.db, &state.tokens)
        .login(LoginParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(issued.into_dto())))
}

/// Register a new account.
///
/// Self-registered accounts are always members without a team. A manager or
/// administrator attaches them to a team afterwards.
///
/// # Returns
/// - `201 Created` - Token and the new account
/// - `400 Bad Request` - Invalid field
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Successfully registered", body = TokenDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let issued = AuthService::new(&state.db, &state.tokens)
        .register(RegisterParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(issued.into_dto())))
}
