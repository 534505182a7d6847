use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CallUpDto {
    pub id: i32,
    pub event_id: i32,
    pub player_id: i32,
    pub starter: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCallUpDto {
    pub event_id: i32,
    pub player_id: i32,
    #[serde(default)]
    pub starter: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateCallUpDto {
    pub starter: bool,
}
