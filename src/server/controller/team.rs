use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::TeamCategory;
use serde::Deserialize;

use crate::{
    model::{
        account::AccountDto,
        api::ErrorDto,
        team::{CreateTeamDto, PaginatedTeamsDto, TeamDto, UpdateTeamDto},
    },
    server::{
        controller::{default_entries, resolve_caller},
        error::AppError,
        model::{
            account::Account,
            page::PageParam,
            team::{CreateTeamParam, TeamFilter, UpdateTeamParam},
        },
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

#[derive(Deserialize)]
pub struct TeamQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub name: Option<String>,
    pub category: Option<TeamCategory>,
}

/// List teams visible to the caller.
///
/// Administrators see every team, everyone else only their own.
///
/// # Returns
/// - `200 OK` - Paginated teams
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller has no team
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("name" = Option<String>, Query, description = "Substring of the team name"),
        ("category" = Option<String>, Query, description = "Age category, e.g. UNDER_16")
    ),
    responses(
        (status = 200, description = "Successfully retrieved teams", body = PaginatedTeamsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_teams(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<TeamQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let filter = TeamFilter {
        name: query.name,
        category: query.category,
    };
    let teams = TeamService::new(&state.db)
        .get_paginated(
            &state.access(&caller),
            filter,
            PageParam::new(query.page, query.entries),
        )
        .await?;

    Ok((StatusCode::OK, Json(teams.into_dto())))
}

/// Get a team by id.
///
/// # Returns
/// - `200 OK` - The team
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Not the caller's team
/// - `404 Not Found` - No such team
#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Successfully retrieved team", body = TeamDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let team = TeamService::new(&state.db)
        .get_by_id(&state.access(&caller), id)
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// List the accounts of a team.
///
/// Members are not allowed to list accounts, including their teammates.
///
/// # Returns
/// - `200 OK` - Team roster ordered by last name
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller may not list this team's accounts
/// - `404 Not Found` - No such team
#[utoipa::path(
    get,
    path = "/api/teams/{id}/members",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Successfully retrieved team members", body = Vec<AccountDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_team_members(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let members = TeamService::new(&state.db)
        .get_members(&state.access(&caller), id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            members
                .into_iter()
                .map(Account::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a team.
///
/// A manager without a team founds one and becomes its manager. Administrators
/// may name any team-less manager in `manager_id`.
///
/// # Returns
/// - `201 Created` - The new team
/// - `400 Bad Request` - Invalid field or manager_id
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller may not create teams or already has one
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Successfully created team", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Manager not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let team = TeamService::new(&state.db)
        .create(&state.access(&caller), CreateTeamParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

/// Update a team's name or category.
///
/// # Returns
/// - `200 OK` - The updated team
/// - `400 Bad Request` - Invalid field
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Not the caller's team
/// - `404 Not Found` - No such team
#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Successfully updated team", body = TeamDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    let team = TeamService::new(&state.db)
        .update(&state.access(&caller), id, UpdateTeamParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Delete a team. Administrators only.
///
/// # Returns
/// - `204 No Content` - Team deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an administrator
/// - `404 Not Found` - No such team
#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 204, description = "Successfully deleted team"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = resolve_caller(&state, &headers).await?;

    TeamService::new(&state.db)
        .delete(&state.access(&caller), id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
