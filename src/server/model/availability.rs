use entity::sea_orm_active_enums::AvailabilityStatus;

use crate::model::availability::{AvailabilityDto, CreateAvailabilityDto, UpdateAvailabilityDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Availability {
    pub id: i32,
    pub event_id: i32,
    pub player_id: i32,
    pub status: AvailabilityStatus,
    pub comment: Option<String>,
}

impl Availability {
    pub fn into_dto(self) -> AvailabilityDto {
        AvailabilityDto {
            id: self.id,
            event_id: self.event_id,
            player_id: self.player_id,
            status: self.status,
            comment: self.comment,
        }
    }

    pub fn from_entity(entity: entity::availability::Model) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            player_id: entity.player_id,
            status: entity.status,
            comment: entity.comment,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateAvailabilityParam {
    pub event_id: i32,
    pub player_id: i32,
    pub status: AvailabilityStatus,
    pub comment: Option<String>,
}

impl CreateAvailabilityParam {
    pub fn from_dto(dto: CreateAvailabilityDto) -> Self {
        Self {
            event_id: dto.event_id,
            player_id: dto.player_id,
            status: dto.status,
            comment: dto.comment,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAvailabilityParam {
    pub status: AvailabilityStatus,
    pub comment: Option<String>,
}

impl UpdateAvailabilityParam {
    pub fn from_dto(dto: UpdateAvailabilityDto) -> Self {
        Self {
            status: dto.status,
            comment: dto.comment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AvailabilityFilter {
    pub event_id: Option<i32>,
    pub player_id: Option<i32>,
    pub status: Option<AvailabilityStatus>,
}
