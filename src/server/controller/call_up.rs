use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        call_up::{CallUpDto, CreateCallUpDto, UpdateCallUpDto},
    },
    server::{
        controller::resolve_caller,
        error::AppError,
        model::call_up::{CallUp, CallUpFilter, CreateCallUpParam},
        service::call_up::CallUpService,
        state::AppState,
    },
};

/// Tag for grouping call-up endpoints in OpenAPI documentation
pub static CALL_UP_TAG: &str = "call_up";

#[derive(Deserialize)]
pub struct CallUpQuery {
    pub event_id: Option<i32>,
    pub player_id: Option<i32>,
    pub starter: Option<bool>,
}

/// List call-ups for events of the caller's team.
#[utoipa::path(
    get,
    path = "/api/call-ups",
    tag = CALL_UP_TAG,
    params(
        ("event_id" = Option<i32>, Query, description = "Only call-ups for this event"),
        ("player_id" = Option<i32>, Query, description = "Only call-ups of this player"),
        ("starter" = Option<bool>, Query, description = "Only starters or substitutes")
    ),
    responses(
        (status = 200, description = "Successfully retrieved call-ups", body = Vec<CallUpDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_call_ups(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CallUpQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let filter = CallUpFilter {
        event_id: query.event_id,
        player_id: query.player_id,
        starter: query.starter,
    };
    let call_ups = CallUpService::new(&state.db)
        .get_all(&state.access(&caller), filter)
        .await?;

    Ok((
        StatusCode::OK,
        Json(call_ups.into_iter().map(CallUp::into_dto).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/call-ups/{id}",
    tag = CALL_UP_TAG,
    params(("id" = i32, Path, description = "Call-up id")),
    responses(
        (status = 200, description = "Successfully retrieved call-up", body = CallUpDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Call-up not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_call_up(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let call_up = CallUpService::new(&state.db)
        .get_by_id(&state.access(&caller), id)
        .await?;

    Ok((StatusCode::OK, Json(call_up.into_dto())))
}

/// Call a player up for an event.
///
/// # Returns
/// - `201 Created` - The new call-up
/// - `400 Bad Request` - Player is not on the event's team
/// - `403 Forbidden` - Caller does not manage the event's team
/// - `404 Not Found` - Event or player does not exist
/// - `409 Conflict` - Player already called up for the event
#[utoipa::path(
    post,
    path = "/api/call-ups",
    tag = CALL_UP_TAG,
    request_body = CreateCallUpDto,
    responses(
        (status = 201, description = "Successfully created call-up", body = CallUpDto),
        (status = 400, description = "Invalid call-up data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Event or player not found", body = ErrorDto),
        (status = 409, description = "Player already called up", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_call_up(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCallUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let call_up = CallUpService::new(&state.db)
        .create(&state.access(&caller), CreateCallUpParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(call_up.into_dto())))
}

/// Mark a called-up player as starter or substitute.
#[utoipa::path(
    put,
    path = "/api/call-ups/{id}",
    tag = CALL_UP_TAG,
    params(("id" = i32, Path, description = "Call-up id")),
    request_body = UpdateCallUpDto,
    responses(
        (status = 200, description = "Successfully updated call-up", body = CallUpDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Call-up not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_call_up(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCallUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let call_up = CallUpService::new(&state.db)
        .update(&state.access(&caller), id, payload.starter)
        .await?;

    Ok((StatusCode::OK, Json(call_up.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/call-ups/{id}",
    tag = CALL_UP_TAG,
    params(("id" = i32, Path, description = "Call-up id")),
    responses(
        (status = 204, description = "Successfully deleted call-up"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Call-up not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_call_up(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    CallUpService::new(&state.db)
        .delete(&state.access(&caller), id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
