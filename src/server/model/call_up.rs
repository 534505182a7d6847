use crate::model::call_up::{CallUpDto, CreateCallUpDto};

#[derive(Debug, Clone, PartialEq)]
pub struct CallUp {
    pub id: i32,
    pub event_id: i32,
    pub player_id: i32,
    pub starter: bool,
}

impl CallUp {
    pub fn into_dto(self) -> CallUpDto {
        CallUpDto {
            id: self.id,
            event_id: self.event_id,
            player_id: self.player_id,
            starter: self.starter,
        }
    }

    pub fn from_entity(entity: entity::call_up::Model) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            player_id: entity.player_id,
            starter: entity.starter,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCallUpParam {
    pub event_id: i32,
    pub player_id: i32,
    pub starter: bool,
}

impl CreateCallUpParam {
    pub fn from_dto(dto: CreateCallUpDto) -> Self {
        Self {
            event_id: dto.event_id,
            player_id: dto.player_id,
            starter: dto.starter,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallUpFilter {
    pub event_id: Option<i32>,
    pub player_id: Option<i32>,
    pub starter: Option<bool>,
}
