use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::EventType;
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        event::{CreateEventDto, EventDto, PaginatedEventsDto, UpdateEventDto},
    },
    server::{
        controller::{default_entries, resolve_caller},
        error::AppError,
        model::{
            event::{CreateEventParam, EventFilter, UpdateEventParam},
            page::PageParam,
        },
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

#[derive(Deserialize)]
pub struct EventQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub team_id: Option<i32>,
    pub event_type: Option<EventType>,
    pub date: Option<NaiveDate>,
    pub from: Option<NaiveDate>,
    pub location: Option<String>,
}

/// List events visible to the caller, newest first.
///
/// # Returns
/// - `200 OK` - Paginated events
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller has no team or asked for another team
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("team_id" = Option<i32>, Query, description = "Only events of this team"),
        ("event_type" = Option<String>, Query, description = "TRAINING, MATCH or MEETING"),
        ("date" = Option<String>, Query, description = "Exact date (YYYY-MM-DD)"),
        ("from" = Option<String>, Query, description = "Events on or after this date"),
        ("location" = Option<String>, Query, description = "Substring of the location")
    ),
    responses(
        (status = 200, description = "Successfully retrieved events", body = PaginatedEventsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EventQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let filter = EventFilter {
        team_id: query.team_id,
        event_type: query.event_type,
        date: query.date,
        from: query.from,
        location: query.location,
    };
    let events = EventService::new(&state.db)
        .get_paginated(
            &state.access(&caller),
            filter,
            PageParam::new(query.page, query.entries),
        )
        .await?;

    Ok((StatusCode::OK, Json(events.into_dto())))
}

/// Get an event by id.
///
/// # Returns
/// - `200 OK` - The event
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Event of another team
/// - `404 Not Found` - No such event
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Successfully retrieved event", body = EventDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let event = EventService::new(&state.db)
        .get_by_id(&state.access(&caller), id)
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Schedule an event for a team.
///
/// # Returns
/// - `201 Created` - The new event
/// - `400 Bad Request` - Invalid field
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller does not manage the team
/// - `404 Not Found` - No such team
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Successfully created event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let event = EventService::new(&state.db)
        .create(&state.access(&caller), CreateEventParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// Update an event.
///
/// # Returns
/// - `200 OK` - The updated event
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller does not manage the event's team
/// - `404 Not Found` - No such event
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Successfully updated event", body = EventDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let event = EventService::new(&state.db)
        .update(&state.access(&caller), id, UpdateEventParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Delete an event along with its call-ups, availability and statistics.
///
/// # Returns
/// - `204 No Content` - Event deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller does not manage the event's team
/// - `404 Not Found` - No such event
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 204, description = "Successfully deleted event"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    EventService::new(&state.db)
        .delete(&state.access(&caller), id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
