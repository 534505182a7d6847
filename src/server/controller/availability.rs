use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::AvailabilityStatus;
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        availability::{AvailabilityDto, CreateAvailabilityDto, UpdateAvailabilityDto},
    },
    server::{
        controller::resolve_caller,
        error::AppError,
        model::availability::{
            Availability, AvailabilityFilter, CreateAvailabilityParam, UpdateAvailabilityParam,
        },
        service::availability::AvailabilityService,
        state::AppState,
    },
};

/// Tag for grouping availability endpoints in OpenAPI documentation
pub static AVAILABILITY_TAG: &str = "availability";

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub event_id: Option<i32>,
    pub player_id: Option<i32>,
    pub status: Option<AvailabilityStatus>,
}

/// List availability answers for events of the caller's team.
#[utoipa::path(
    get,
    path = "/api/availability",
    tag = AVAILABILITY_TAG,
    params(
        ("event_id" = Option<i32>, Query, description = "Only answers for this event"),
        ("player_id" = Option<i32>, Query, description = "Only answers of this player"),
        ("status" = Option<String>, Query, description = "ATTENDING, NOT_ATTENDING or UNSURE")
    ),
    responses(
        (status = 200, description = "Successfully retrieved availability", body = Vec<AvailabilityDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_availabilities(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let filter = AvailabilityFilter {
        event_id: query.event_id,
        player_id: query.player_id,
        status: query.status,
    };
    let answers = AvailabilityService::new(&state.db)
        .get_all(&state.access(&caller), filter)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            answers
                .into_iter()
                .map(Availability::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/availability/{id}",
    tag = AVAILABILITY_TAG,
    params(("id" = i32, Path, description = "Availability id")),
    responses(
        (status = 200, description = "Successfully retrieved availability", body = AvailabilityDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Availability not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_availability(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let answer = AvailabilityService::new(&state.db)
        .get_by_id(&state.access(&caller), id)
        .await?;

    Ok((StatusCode::OK, Json(answer.into_dto())))
}

/// Record whether a player attends an event.
///
/// Members answer for themselves only; staff may answer for any player of the
/// event's team.
///
/// # Returns
/// - `201 Created` - The recorded answer
/// - `400 Bad Request` - Player is not on the event's team
/// - `403 Forbidden` - Caller may not answer for this player
/// - `404 Not Found` - Event or player does not exist
/// - `409 Conflict` - The player already answered
#[utoipa::path(
    post,
    path = "/api/availability",
    tag = AVAILABILITY_TAG,
    request_body = CreateAvailabilityDto,
    responses(
        (status = 201, description = "Successfully recorded availability", body = AvailabilityDto),
        (status = 400, description = "Invalid availability data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Event or player not found", body = ErrorDto),
        (status = 409, description = "Availability already recorded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_availability(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAvailabilityDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let answer = AvailabilityService::new(&state.db)
        .create(
            &state.access(&caller),
            CreateAvailabilityParam::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(answer.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/availability/{id}",
    tag = AVAILABILITY_TAG,
    params(("id" = i32, Path, description = "Availability id")),
    request_body = UpdateAvailabilityDto,
    responses(
        (status = 200, description = "Successfully updated availability", body = AvailabilityDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Availability not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_availability(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAvailabilityDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let answer = AvailabilityService::new(&state.db)
        .update(
            &state.access(&caller),
            id,
            UpdateAvailabilityParam::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(answer.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/availability/{id}",
    tag = AVAILABILITY_TAG,
    params(("id" = i32, Path, description = "Availability id")),
    responses(
        (status = 204, description = "Successfully deleted availability"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Availability not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_availability(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    AvailabilityService::new(&state.db)
        .delete(&state.access(&caller), id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
