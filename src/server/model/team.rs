//! Team domain models and parameters.

use entity::sea_orm_active_enums::TeamCategory;

use crate::{
    model::team::{CreateTeamDto, PaginatedTeamsDto, TeamDto, UpdateTeamDto},
    server::model::page::Paginated,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub category: TeamCategory,
    /// Account managing the team, if any.
    pub manager_id: Option<i32>,
}

impl Team {
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            name: self.name,
            category: self.category,
            manager_id: self.manager_id,
        }
    }

    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            category: entity.category,
            manager_id: entity.manager_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTeamParam {
    pub name: String,
    pub category: TeamCategory,
    pub manager_id: Option<i32>,
}

impl CreateTeamParam {
    pub fn from_dto(dto: CreateTeamDto) -> Self {
        Self {
            name: dto.name,
            category: dto.category,
            manager_id: dto.manager_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateTeamParam {
    pub name: Option<String>,
    pub category: Option<TeamCategory>,
}

impl UpdateTeamParam {
    pub fn from_dto(dto: UpdateTeamDto) -> Self {
        Self {
            name: dto.name,
            category: dto.category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeamFilter {
    pub name: Option<String>,
    pub category: Option<TeamCategory>,
}

impl Paginated<Team> {
    pub fn into_dto(self) -> PaginatedTeamsDto {
        PaginatedTeamsDto {
            teams: self.items.into_iter().map(Team::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
