//! Statistic domain models and parameters.
//!
//! A statistic row is unique per (event, player); saving again for the same pair
//! overwrites the counters.

use crate::model::statistic::{SaveStatisticDto, StatisticDto, UpdateStatisticDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Statistic {
    pub id: i32,
    pub event_id: i32,
    pub player_id: i32,
    pub goals: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
}

impl Statistic {
    pub fn into_dto(self) -> StatisticDto {
        StatisticDto {
            id: self.id,
            event_id: self.event_id,
            player_id: self.player_id,
            goals: self.goals,
            yellow_cards: self.yellow_cards,
            red_cards: self.red_cards,
        }
    }

    pub fn from_entity(entity: entity::statistic::Model) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            player_id: entity.player_id,
            goals: entity.goals,
            yellow_cards: entity.yellow_cards,
            red_cards: entity.red_cards,
        }
    }
}

/// Parameters for inserting or overwriting a player's statistics for an event.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveStatisticParam {
    pub event_id: i32,
    pub player_id: i32,
    pub goals: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
}

impl SaveStatisticParam {
    pub fn from_dto(dto: SaveStatisticDto) -> Self {
        Self {
            event_id: dto.event_id,
            player_id: dto.player_id,
            goals: dto.goals,
            yellow_cards: dto.yellow_cards,
            red_cards: dto.red_cards,
        }
    }
}

/// Partial counter update. `None` keeps the stored value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateStatisticParam {
    pub goals: Option<i32>,
    pub yellow_cards: Option<i32>,
    pub red_cards: Option<i32>,
}

impl UpdateStatisticParam {
    pub fn from_dto(dto: UpdateStatisticDto) -> Self {
        Self {
            goals: dto.goals,
            yellow_cards: dto.yellow_cards,
            red_cards: dto.red_cards,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatisticFilter {
    pub event_id: Option<i32>,
    pub player_id: Option<i32>,
}
