use chrono::{NaiveDate, NaiveTime};
use entity::sea_orm_active_enums::EventType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub team_id: i32,
    #[schema(value_type = String, example = "MATCH")]
    pub event_type: EventType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateEventDto {
    pub team_id: i32,
    #[schema(value_type = String, example = "TRAINING")]
    pub event_type: EventType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Partial event update. Events cannot move between teams.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateEventDto {
    #[schema(value_type = Option<String>)]
    pub event_type: Option<EventType>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedEventsDto {
    pub events: Vec<EventDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
