use chrono::NaiveDate;
use entity::sea_orm_active_enums::DueStatus;

use crate::model::due::{CreateDueDto, DueDto, UpdateDueDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Due {
    pub id: i32,
    pub player_id: i32,
    pub concept: String,
    pub amount: f64,
    pub status: DueStatus,
    pub payment_date: Option<NaiveDate>,
}

impl Due {
    pub fn into_dto(self) -> DueDto {
        DueDto {
            id: self.id,
            player_id: self.player_id,
            concept: self.concept,
            amount: self.amount,
            status: self.status,
            payment_date: self.payment_date,
        }
    }

    pub fn from_entity(entity: entity::due::Model) -> Self {
        Self {
            id: entity.id,
            player_id: entity.player_id,
            concept: entity.concept,
            amount: entity.amount,
            status: entity.status,
            payment_date: entity.payment_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateDueParam {
    pub player_id: i32,
    pub concept: String,
    pub amount: f64,
    pub status: DueStatus,
    pub payment_date: Option<NaiveDate>,
}

impl CreateDueParam {
    pub fn from_dto(dto: CreateDueDto) -> Self {
        Self {
            player_id: dto.player_id,
            concept: dto.concept,
            amount: dto.amount,
            status: dto.status,
            payment_date: dto.payment_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateDueParam {
    pub concept: Option<String>,
    pub amount: Option<f64>,
    pub status: Option<DueStatus>,
    pub payment_date: Option<NaiveDate>,
}

impl UpdateDueParam {
    pub fn from_dto(dto: UpdateDueDto) -> Self {
        Self {
            concept: dto.concept,
            amount: dto.amount,
            status: dto.status,
            payment_date: dto.payment_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DueFilter {
    pub player_id: Option<i32>,
    pub status: Option<DueStatus>,
}
