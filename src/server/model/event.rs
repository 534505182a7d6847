//! Event domain models and parameters.
//!
//! Every event belongs to exactly one team, and every access decision about an
//! event is made against that team.

use chrono::{NaiveDate, NaiveTime};
use entity::sea_orm_active_enums::EventType;

use crate::{
    model::event::{CreateEventDto, EventDto, PaginatedEventsDto, UpdateEventDto},
    server::model::page::Paginated,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub team_id: i32,
    pub event_type: EventType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl Event {
    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            team_id: self.team_id,
            event_type: self.event_type,
            date: self.date,
            time: self.time,
            location: self.location,
            description: self.description,
        }
    }

    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            team_id: entity.team_id,
            event_type: entity.event_type,
            date: entity.date,
            time: entity.time,
            location: entity.location,
            description: entity.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateEventParam {
    pub team_id: i32,
    pub event_type: EventType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl CreateEventParam {
    pub fn from_dto(dto: CreateEventDto) -> Self {
        Self {
            team_id: dto.team_id,
            event_type: dto.event_type,
            date: dto.date,
            time: dto.time,
            location: dto.location,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateEventParam {
    pub event_type: Option<EventType>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl UpdateEventParam {
    pub fn from_dto(dto: UpdateEventDto) -> Self {
        Self {
            event_type: dto.event_type,
            date: dto.date,
            time: dto.time,
            location: dto.location,
            description: dto.description,
        }
    }
}

/// Optional filters for event listings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventFilter {
    pub team_id: Option<i32>,
    pub event_type: Option<EventType>,
    /// Exact date.
    pub date: Option<NaiveDate>,
    /// Events on or after this date.
    pub from: Option<NaiveDate>,
    pub location: Option<String>,
}

impl Paginated<Event> {
    pub fn into_dto(self) -> PaginatedEventsDto {
        PaginatedEventsDto {
            events: self.items.into_iter().map(Event::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
