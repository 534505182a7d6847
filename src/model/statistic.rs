use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StatisticDto {
    pub id: i32,
    pub event_id: i32,
    pub player_id: i32,
    pub goals: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
}

/// Records a player's statistics for an event, replacing any existing row
/// for the same event and player.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SaveStatisticDto {
    pub event_id: i32,
    pub player_id: i32,
    #[serde(default)]
    pub goals: i32,
    #[serde(default)]
    pub yellow_cards: i32,
    #[serde(default)]
    pub red_cards: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateStatisticDto {
    pub goals: Option<i32>,
    pub yellow_cards: Option<i32>,
    pub red_cards: Option<i32>,
}
