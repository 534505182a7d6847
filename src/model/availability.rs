use entity::sea_orm_active_enums::AvailabilityStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AvailabilityDto {
    pub id: i32,
    pub event_id: i32,
    pub player_id: i32,
    #[schema(value_type = String, example = "ATTENDING")]
    pub status: AvailabilityStatus,
    pub comment: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAvailabilityDto {
    pub event_id: i32,
    pub player_id: i32,
    #[schema(value_type = String, example = "ATTENDING")]
    pub status: AvailabilityStatus,
    pub comment: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateAvailabilityDto {
    #[schema(value_type = String, example = "UNSURE")]
    pub status: AvailabilityStatus,
    pub comment: Option<String>,
}
