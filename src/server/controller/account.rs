use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::{Position, Role};
use serde::Deserialize;

use crate::{
    model::{
        account::{
            AccountDto, ChangePasswordDto, CreateAccountDto, PaginatedAccountsDto,
            UpdateAccountDto,
        },
        api::ErrorDto,
    },
    server::{
        controller::{default_entries, resolve_caller},
        error::AppError,
        model::{
            account::{AccountFilter, CreateAccountParam, UpdateAccountParam},
            page::PageParam,
        },
        service::account::AccountService,
        state::AppState,
    },
};

/// Tag for grouping account endpoints in OpenAPI documentation
pub static ACCOUNT_TAG: &str = "account";

#[derive(Deserialize)]
pub struct AccountQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub team_id: Option<i32>,
    pub role: Option<Role>,
    pub last_name: Option<String>,
    pub position: Option<Position>,
    pub email: Option<String>,
}

/// List accounts visible to the caller.
///
/// # Access Control
/// - `Administrator` - Any account, optionally narrowed with `team_id`
/// - `Manager` - Accounts of their own team only
/// - `Member` - Forbidden
///
/// # Returns
/// - `200 OK` - Paginated accounts
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller may not list accounts or asked for another team
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/accounts",
    tag = ACCOUNT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("team_id" = Option<i32>, Query, description = "Only accounts of this team"),
        ("role" = Option<String>, Query, description = "MEMBER, MANAGER or ADMINISTRATOR"),
        ("last_name" = Option<String>, Query, description = "Substring of the last name"),
        ("position" = Option<String>, Query, description = "Playing position"),
        ("email" = Option<String>, Query, description = "Substring of the email")
    ),
    responses(
        (status = 200, description = "Successfully retrieved accounts", body = PaginatedAccountsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_accounts(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AccountQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let filter = AccountFilter {
        team_id: query.team_id,
        role: query.role,
        last_name: query.last_name,
        position: query.position,
        email: query.email,
    };
    let accounts = AccountService::new(&state.db)
        .get_paginated(
            &state.access(&caller),
            filter,
            PageParam::new(query.page, query.entries),
        )
        .await?;

    Ok((StatusCode::OK, Json(accounts.into_dto())))
}

/// Get the caller's own account.
///
/// # Returns
/// - `200 OK` - The caller's account
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/accounts/me",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "The authenticated account", body = AccountDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    Ok((StatusCode::OK, Json(caller.into_dto())))
}

/// Change the caller's own password.
///
/// # Returns
/// - `204 No Content` - Password changed
/// - `400 Bad Request` - Current password wrong or new password too short
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    put,
    path = "/api/accounts/me/password",
    tag = ACCOUNT_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Invalid password", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    AccountService::new(&state.db)
        .change_password(
            &state.access(&caller),
            &payload.current_password,
            &payload.new_password,
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get an account by id.
///
/// # Access Control
/// - `Administrator` - Any account
/// - `Manager` - Accounts of their own team
/// - `Member` - Only themself
///
/// # Returns
/// - `200 OK` - The account
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Account outside the caller's reach
/// - `404 Not Found` - No such account
#[utoipa::path(
    get,
    path = "/api/accounts/{id}",
    tag = ACCOUNT_TAG,
    params(("id" = i32, Path, description = "Account id")),
    responses(
        (status = 200, description = "Successfully retrieved account", body = AccountDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let account = AccountService::new(&state.db)
        .get_by_id(&state.access(&caller), id)
        .await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

/// Create an account.
///
/// Managers always create members of their own team, whatever role or team the
/// payload names.
///
/// # Returns
/// - `201 Created` - The new account
/// - `400 Bad Request` - Invalid field or unknown team
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller may not create accounts
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/accounts",
    tag = ACCOUNT_TAG,
    request_body = CreateAccountDto,
    responses(
        (status = 201, description = "Successfully created account", body = AccountDto),
        (status = 400, description = "Invalid account data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let account = AccountService::new(&state.db)
        .create(&state.access(&caller), CreateAccountParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(account.into_dto())))
}

/// Update an account.
///
/// Only administrators may change role or team affiliation.
///
/// # Returns
/// - `200 OK` - The updated account
/// - `400 Bad Request` - Invalid field
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Account outside the caller's reach or privileged change
/// - `404 Not Found` - No such account
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    put,
    path = "/api/accounts/{id}",
    tag = ACCOUNT_TAG,
    params(("id" = i32, Path, description = "Account id")),
    request_body = UpdateAccountDto,
    responses(
        (status = 200, description = "Successfully updated account", body = AccountDto),
        (status = 400, description = "Invalid account data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let account = AccountService::new(&state.db)
        .update(
            &state.access(&caller),
            id,
            UpdateAccountParam::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

/// Delete an account.
///
/// Managers may only delete members of their own team.
///
/// # Returns
/// - `204 No Content` - Account deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller may not delete this account
/// - `404 Not Found` - No such account
#[utoipa::path(
    delete,
    path = "/api/accounts/{id}",
    tag = ACCOUNT_TAG,
    params(("id" = i32, Path, description = "Account id")),
    responses(
        (status = 204, description = "Successfully deleted account"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    AccountService::new(&state.db)
        .delete(&state.access(&caller), id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
