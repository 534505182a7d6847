use entity::sea_orm_active_enums::TeamCategory;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String, example = "SENIOR")]
    pub category: TeamCategory,
    pub manager_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTeamDto {
    pub name: String,
    #[schema(value_type = String, example = "SENIOR")]
    pub category: TeamCategory,
    /// Only honoured for administrators; managers always manage the teams they create.
    pub manager_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateTeamDto {
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub category: Option<TeamCategory>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedTeamsDto {
    pub teams: Vec<TeamDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
