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
        statistic::{SaveStatisticDto, StatisticDto, UpdateStatisticDto},
    },
    server::{
        controller::resolve_caller,
        error::AppError,
        model::statistic::{
            SaveStatisticParam, Statistic, StatisticFilter, UpdateStatisticParam,
        },
        service::statistic::StatisticService,
        state::AppState,
    },
};

/// Tag for grouping statistic endpoints in OpenAPI documentation
pub static STATISTIC_TAG: &str = "statistic";

#[derive(Deserialize)]
pub struct StatisticQuery {
    pub event_id: Option<i32>,
    pub player_id: Option<i32>,
}

/// List match statistics for events of the caller's team.
#[utoipa::path(
    get,
    path = "/api/statistics",
    tag = STATISTIC_TAG,
    params(
        ("event_id" = Option<i32>, Query, description = "Only statistics of this event"),
        ("player_id" = Option<i32>, Query, description = "Only statistics of this player")
    ),
    responses(
        (status = 200, description = "Successfully retrieved statistics", body = Vec<StatisticDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_statistics(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<StatisticQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let filter = StatisticFilter {
        event_id: query.event_id,
        player_id: query.player_id,
    };
    let statistics = StatisticService::new(&state.db)
        .get_all(&state.access(&caller), filter)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            statistics
                .into_iter()
                .map(Statistic::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/statistics/{id}",
    tag = STATISTIC_TAG,
    params(("id" = i32, Path, description = "Statistic id")),
    responses(
        (status = 200, description = "Successfully retrieved statistic", body = StatisticDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Statistic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_statistic(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let statistic = StatisticService::new(&state.db)
        .get_by_id(&state.access(&caller), id)
        .await?;

    Ok((StatusCode::OK, Json(statistic.into_dto())))
}

/// Record a player's statistics for an event.
///
/// Saving again for the same player and event replaces the earlier line.
///
/// # Returns
/// - `200 OK` - The saved statistics
/// - `400 Bad Request` - Negative count or player not on the event's team
/// - `403 Forbidden` - Caller does not manage the event's team
/// - `404 Not Found` - Event or player does not exist
#[utoipa::path(
    post,
    path = "/api/statistics",
    tag = STATISTIC_TAG,
    request_body = SaveStatisticDto,
    responses(
        (status = 200, description = "Successfully saved statistic", body = StatisticDto),
        (status = 400, description = "Invalid statistic data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Event or player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn save_statistic(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SaveStatisticDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let statistic = StatisticService::new(&state.db)
        .save(&state.access(&caller), SaveStatisticParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(statistic.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/statistics/{id}",
    tag = STATISTIC_TAG,
    params(("id" = i32, Path, description = "Statistic id")),
    request_body = UpdateStatisticDto,
    responses(
        (status = 200, description = "Successfully updated statistic", body = StatisticDto),
        (status = 400, description = "Invalid statistic data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Statistic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_statistic(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStatisticDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let statistic = StatisticService::new(&state.db)
        .update(
            &state.access(&caller),
            id,
            UpdateStatisticParam::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(statistic.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/statistics/{id}",
    tag = STATISTIC_TAG,
    params(("id" = i32, Path, description = "Statistic id")),
    responses(
        (status = 204, description = "Successfully deleted statistic"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Statistic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_statistic(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    StatisticService::new(&state.db)
        .delete(&state.access(&caller), id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
