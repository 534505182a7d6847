use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::DueStatus;
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        due::{CreateDueDto, DueDto, UpdateDueDto},
    },
    server::{
        controller::resolve_caller,
        error::AppError,
        model::due::{CreateDueParam, Due, DueFilter, UpdateDueParam},
        service::due::DueService,
        state::AppState,
    },
};

/// Tag for grouping due endpoints in OpenAPI documentation
pub static DUE_TAG: &str = "due";

#[derive(Deserialize)]
pub struct DueQuery {
    pub player_id: Option<i32>,
    pub status: Option<DueStatus>,
}

/// List dues visible to the caller.
///
/// # Access Control
/// - `Administrator` - Every due
/// - `Manager` - Dues of players on their team
/// - `Member` - Their own dues only
#[utoipa::path(
    get,
    path = "/api/dues",
    tag = DUE_TAG,
    params(
        ("player_id" = Option<i32>, Query, description = "Only dues of this player"),
        ("status" = Option<String>, Query, description = "PENDING, PAID or EXEMPT")
    ),
    responses(
        (status = 200, description = "Successfully retrieved dues", body = Vec<DueDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_dues(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<DueQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let filter = DueFilter {
        player_id: query.player_id,
        status: query.status,
    };
    let dues = DueService::new(&state.db)
        .get_all(&state.access(&caller), filter)
        .await?;

    Ok((
        StatusCode::OK,
        Json(dues.into_iter().map(Due::into_dto).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/dues/{id}",
    tag = DUE_TAG,
    params(("id" = i32, Path, description = "Due id")),
    responses(
        (status = 200, description = "Successfully retrieved due", body = DueDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Due not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_due(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let due = DueService::new(&state.db)
        .get_by_id(&state.access(&caller), id)
        .await?;

    Ok((StatusCode::OK, Json(due.into_dto())))
}

/// Charge a due to a player.
///
/// # Returns
/// - `201 Created` - The new due
/// - `400 Bad Request` - Empty concept or negative amount
/// - `403 Forbidden` - Caller does not manage the player's team
/// - `404 Not Found` - No such player
#[utoipa::path(
    post,
    path = "/api/dues",
    tag = DUE_TAG,
    request_body = CreateDueDto,
    responses(
        (status = 201, description = "Successfully created due", body = DueDto),
        (status = 400, description = "Invalid due data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_due(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDueDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let due = DueService::new(&state.db)
        .create(&state.access(&caller), CreateDueParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(due.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/dues/{id}",
    tag = DUE_TAG,
    params(("id" = i32, Path, description = "Due id")),
    request_body = UpdateDueDto,
    responses(
        (status = 200, description = "Successfully updated due", body = DueDto),
        (status = 400, description = "Invalid due data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Due not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_due(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDueDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let due = DueService::new(&state.db)
        .update(&state.access(&caller), id, UpdateDueParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(due.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/dues/{id}",
    tag = DUE_TAG,
    params(("id" = i32, Path, description = "Due id")),
    responses(
        (status = 204, description = "Successfully deleted due"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Due not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_due(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    DueService::new(&state.db)
        .delete(&state.access(&caller), id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
