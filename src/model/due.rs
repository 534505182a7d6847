use chrono::NaiveDate;
use entity::sea_orm_active_enums::DueStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DueDto {
    pub id: i32,
    pub player_id: i32,
    pub concept: String,
    pub amount: f64,
    #[schema(value_type = String, example = "PENDING")]
    pub status: DueStatus,
    pub payment_date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateDueDto {
    pub player_id: i32,
    pub concept: String,
    pub amount: f64,
    #[schema(value_type = String, example = "PENDING")]
    pub status: DueStatus,
    pub payment_date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateDueDto {
    pub concept: Option<String>,
    pub amount: Option<f64>,
    #[schema(value_type = Option<String>)]
    pub status: Option<DueStatus>,
    pub payment_date: Option<NaiveDate>,
}
